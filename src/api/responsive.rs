use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

/// Layout box of the element the chart is drawn into.
pub trait MeasuredElement {
    /// Current rendered width of the element.
    fn bounding_width(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type ResizeListener = Rc<dyn Fn()>;

#[derive(Default)]
struct NotifierInner {
    next_id: u64,
    listeners: IndexMap<ListenerId, ResizeListener>,
}

/// Host viewport resize hub.
///
/// Clones share one listener registry. Listeners run in registration order;
/// a listener removed while a notification is being dispatched does not run.
#[derive(Clone, Default)]
pub struct ResizeNotifier {
    inner: Rc<RefCell<NotifierInner>>,
}

impl fmt::Debug for ResizeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ResizeNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, listener: impl Fn() + 'static) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.insert(id, Rc::new(listener));
        id
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.inner.borrow_mut().listeners.shift_remove(&id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Delivers one resize notification, returning how many listeners ran.
    pub fn notify(&self) -> usize {
        let ids: Vec<ListenerId> = self.inner.borrow().listeners.keys().copied().collect();
        trace!(listeners = ids.len(), "dispatching resize notification");

        let mut delivered = 0;
        for id in ids {
            let listener = self.inner.borrow().listeners.get(&id).cloned();
            if let Some(listener) = listener {
                listener();
                delivered += 1;
            }
        }
        delivered
    }
}

/// Width published to consumers of [`ResponsiveWidth`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthProps {
    pub width: f64,
}

type WidthSubscriber = Box<dyn FnMut(WidthProps)>;

struct WidthState {
    width: f64,
    element: Option<Rc<dyn MeasuredElement>>,
    subscribers: Vec<WidthSubscriber>,
}

/// Measures its element's width and republishes it on every host resize.
///
/// The component holds the resize listener only between [`mount`] and
/// [`unmount`]; dropping a mounted component unmounts it. The listener keeps
/// a weak reference to the width state, so a destroyed component can never
/// be updated by a late notification.
///
/// [`mount`]: ResponsiveWidth::mount
/// [`unmount`]: ResponsiveWidth::unmount
pub struct ResponsiveWidth {
    state: Rc<RefCell<WidthState>>,
    notifier: ResizeNotifier,
    listener: Option<ListenerId>,
}

impl fmt::Debug for ResponsiveWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ResponsiveWidth")
            .field("width", &state.width)
            .field("element_attached", &state.element.is_some())
            .field("subscribers", &state.subscribers.len())
            .field("mounted", &self.listener.is_some())
            .finish()
    }
}

impl ResponsiveWidth {
    #[must_use]
    pub fn new(notifier: ResizeNotifier) -> Self {
        Self {
            state: Rc::new(RefCell::new(WidthState {
                width: 0.0,
                element: None,
                subscribers: Vec::new(),
            })),
            notifier,
            listener: None,
        }
    }

    pub fn attach(&mut self, element: Rc<dyn MeasuredElement>) {
        self.state.borrow_mut().element = Some(element);
    }

    pub fn detach_element(&mut self) -> Option<Rc<dyn MeasuredElement>> {
        self.state.borrow_mut().element.take()
    }

    /// Starts listening for resizes and measures once right away.
    ///
    /// Mounting an already mounted component is a no-op.
    pub fn mount(&mut self) {
        if self.listener.is_some() {
            return;
        }

        let state = Rc::downgrade(&self.state);
        let id = self.notifier.add_listener(move || {
            if let Some(state) = state.upgrade() {
                remeasure(&state);
            }
        });
        self.listener = Some(id);
        debug!(listener = ?id, "responsive width mounted");

        remeasure(&self.state);
    }

    /// Stops listening for resizes.
    pub fn unmount(&mut self) {
        if let Some(id) = self.listener.take() {
            let removed = self.notifier.remove_listener(id);
            debug!(listener = ?id, removed, "responsive width unmounted");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Re-measures the attached element outside of a resize notification.
    ///
    /// Returns `true` when the published width changed.
    pub fn measure(&self) -> bool {
        remeasure(&self.state)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.state.borrow().width
    }

    #[must_use]
    pub fn props(&self) -> WidthProps {
        WidthProps {
            width: self.width(),
        }
    }

    /// Registers a consumer called with the new width whenever it changes.
    pub fn subscribe(&self, subscriber: impl FnMut(WidthProps) + 'static) {
        self.state
            .borrow_mut()
            .subscribers
            .push(Box::new(subscriber));
    }
}

impl Drop for ResponsiveWidth {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn remeasure(state: &RefCell<WidthState>) -> bool {
    let element = state.borrow().element.clone();
    let Some(element) = element else {
        trace!("no element attached, skipping width measurement");
        return false;
    };

    let measured = element.bounding_width();
    if !measured.is_finite() {
        warn!(measured, "ignoring non-finite container width");
        return false;
    }
    let measured = measured.max(0.0);

    {
        let mut state = state.borrow_mut();
        if state.width == measured {
            return false;
        }
        state.width = measured;
    }
    trace!(width = measured, "container width changed");

    publish(state, WidthProps { width: measured });
    true
}

fn publish(state: &RefCell<WidthState>, props: WidthProps) {
    let mut subscribers = std::mem::take(&mut state.borrow_mut().subscribers);
    for subscriber in &mut subscribers {
        subscriber(props);
    }

    let mut state = state.borrow_mut();
    subscribers.append(&mut state.subscribers);
    state.subscribers = subscribers;
}
