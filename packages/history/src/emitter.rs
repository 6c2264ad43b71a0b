use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    fmt,
    rc::{Rc, Weak},
};

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::{future::poll_fn, StreamExt};

type Listener<E> = Rc<dyn Fn(&E)>;

/// An event waiting for delivery.
struct Queued<E> {
    event: E,
    /// Only listeners with an id below this value were registered when the event was emitted.
    audience: u64,
}

struct Shared<E> {
    listeners: RefCell<BTreeMap<u64, Listener<E>>>,
    next_id: Cell<u64>,
    pending: Cell<usize>,
    rx: RefCell<UnboundedReceiver<Queued<E>>>,
}

impl<E> Shared<E> {
    fn deliver(&self, queued: Queued<E>) {
        self.pending.set(self.pending.get().saturating_sub(1));

        let audience: Vec<(u64, Listener<E>)> = self
            .listeners
            .borrow()
            .range(..queued.audience)
            .map(|(id, listener)| (*id, listener.clone()))
            .collect();

        tracing::trace!(listeners = audience.len(), "delivering notification");

        for (id, listener) in audience {
            // an earlier listener may have unsubscribed this one
            if !self.listeners.borrow().contains_key(&id) {
                continue;
            }
            listener(&queued.event);
        }
    }
}

trait ListenerRegistry {
    fn remove(&self, id: u64) -> bool;

    fn contains(&self, id: u64) -> bool;
}

impl<E> ListenerRegistry for Shared<E> {
    fn remove(&self, id: u64) -> bool {
        self.listeners.borrow_mut().remove(&id).is_some()
    }

    fn contains(&self, id: u64) -> bool {
        self.listeners.borrow().contains_key(&id)
    }
}

/// The sending half of a deferred notification channel.
///
/// [`Emitter::emit`] never runs a listener. Events are queued and handed to the listeners by a
/// [`Dispatcher`], either synchronously with [`Dispatcher::flush`] or from an executor with
/// [`Dispatcher::run`]. Events are delivered in emit order, each to the listeners that were
/// registered at the moment it was emitted.
pub struct Emitter<E: 'static> {
    shared: Rc<Shared<E>>,
    tx: UnboundedSender<Queued<E>>,
}

impl<E: 'static> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Emitter<E> {
    /// Create an emitter without listeners.
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            shared: Rc::new(Shared {
                listeners: RefCell::new(BTreeMap::new()),
                next_id: Cell::new(0),
                pending: Cell::new(0),
                rx: RefCell::new(rx),
            }),
            tx,
        }
    }

    /// Register a listener for every event emitted from now on.
    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .listeners
            .borrow_mut()
            .insert(id, Rc::new(listener));

        tracing::trace!(id, "listener subscribed");

        let registry: Rc<dyn ListenerRegistry> = self.shared.clone();
        Subscription {
            registry: Rc::downgrade(&registry),
            id,
        }
    }

    /// Queue `event` for delivery to the current listeners.
    ///
    /// Events emitted while nobody listens are dropped, since no later listener may see them.
    pub fn emit(&self, event: E) {
        if self.shared.listeners.borrow().is_empty() {
            tracing::trace!("no listeners, event dropped");
            return;
        }

        let queued = Queued {
            event,
            audience: self.shared.next_id.get(),
        };

        // the receiver lives as long as `shared`, so the channel cannot be closed here
        if self.tx.unbounded_send(queued).is_ok() {
            self.shared.pending.set(self.shared.pending.get() + 1);
        }
    }

    /// The number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }

    /// Get a handle that delivers the queued events.
    pub fn dispatcher(&self) -> Dispatcher<E> {
        Dispatcher {
            shared: self.shared.clone(),
        }
    }
}

impl<E: 'static> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listener_count())
            .field("pending", &self.shared.pending.get())
            .finish()
    }
}

/// Delivers the events queued by an [`Emitter`].
pub struct Dispatcher<E> {
    shared: Rc<Shared<E>>,
}

impl<E> Clone for Dispatcher<E> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<E> Dispatcher<E> {
    /// Deliver every event queued so far, returning how many were delivered.
    ///
    /// Events emitted by listeners while flushing are delivered by the same call.
    pub fn flush(&self) -> usize {
        let mut delivered = 0;
        loop {
            // the borrow must end before any listener runs
            let next = self.shared.rx.borrow_mut().try_recv();
            match next {
                Ok(queued) => {
                    self.shared.deliver(queued);
                    delivered += 1;
                }
                Err(_) => break,
            }
        }
        delivered
    }

    /// Deliver events as they are emitted.
    ///
    /// The returned future completes once the emitter is dropped and every remaining event has
    /// been delivered.
    pub async fn run(self) {
        loop {
            let next = poll_fn(|cx| self.shared.rx.borrow_mut().poll_next_unpin(cx)).await;
            match next {
                Some(queued) => self.shared.deliver(queued),
                None => break,
            }
        }
        tracing::trace!("emitter dropped, dispatcher finished");
    }

    /// The number of events emitted but not delivered yet.
    pub fn pending(&self) -> usize {
        self.shared.pending.get()
    }
}

impl<E> fmt::Debug for Dispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pending", &self.pending())
            .finish()
    }
}

/// A handle to a registered listener.
///
/// Dropping the handle keeps the listener registered, call [`Subscription::unsubscribe`] to
/// remove it.
pub struct Subscription {
    registry: Weak<dyn ListenerRegistry>,
    id: u64,
}

impl Subscription {
    /// Remove the listener. Returns `false` if it was already removed or its emitter is gone.
    pub fn unsubscribe(self) -> bool {
        let removed = self
            .registry
            .upgrade()
            .is_some_and(|registry| registry.remove(self.id));
        tracing::trace!(id = self.id, removed, "listener unsubscribed");
        removed
    }

    /// Check whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.contains(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
