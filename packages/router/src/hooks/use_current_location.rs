use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use navstack_history::{Location, NavHistory, PathSet, Subscription};

/// Follow the current location of `history`.
///
/// The returned tracker starts at the history's current location and is updated every time a
/// change notification is delivered. It stops listening when dropped.
pub fn use_current_location<S: PathSet>(history: &NavHistory<S>) -> CurrentLocation<S> {
    let location = Rc::new(RefCell::new(history.current_location()));
    let updates = Rc::new(Cell::new(0));

    let slot = location.clone();
    let counter = updates.clone();
    let subscription = history.on_current_location_changed(move |current| {
        *slot.borrow_mut() = current.cloned();
        counter.set(counter.get() + 1);
    });

    CurrentLocation {
        location,
        updates,
        subscription: Some(subscription),
    }
}

/// The tracker returned by [`use_current_location`].
pub struct CurrentLocation<S: PathSet> {
    location: Rc<RefCell<Option<Location<S>>>>,
    updates: Rc<Cell<u64>>,
    subscription: Option<Subscription>,
}

impl<S: PathSet> CurrentLocation<S> {
    /// The last location delivered by the history.
    pub fn get(&self) -> Option<Location<S>> {
        self.location.borrow().clone()
    }

    /// How many notifications the tracker has received.
    pub fn updates(&self) -> u64 {
        self.updates.get()
    }
}

impl<S: PathSet> Drop for CurrentLocation<S> {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
