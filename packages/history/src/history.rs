use std::{cell::RefCell, collections::VecDeque, fmt};

use crate::{
    Changed, Dispatcher, HistoryError, Location, Path, PathSet, SignaledVec, Subscription,
};

/// A back/forward navigation history over the paths of `S`.
///
/// The history is a stack of [`Location`]s whose tail is the current location, plus a redo
/// buffer holding the locations removed by going back. Only [`NavHistory::navigate_to`] clears
/// the redo buffer, so a location reached by going back can be replaced and the rest of the
/// forward history is still there.
///
/// Listeners registered with [`NavHistory::on_current_location_changed`] are not called from
/// inside the navigation methods. They run when the notifications are delivered through
/// [`NavHistory::flush`] or a spawned [`Dispatcher::run`].
///
/// ```rust
/// use navstack_history::{paths, NavHistory};
///
/// paths! {
///     Paths {
///         Home => "/" : (),
///         Counter => "/counter" : u32,
///     }
/// }
///
/// let history = NavHistory::<Paths>::with_initial(Home, ());
/// history.navigate_to(Counter, 1);
/// history.navigate_to(Counter, 2);
///
/// history.go_back_by(2);
/// assert_eq!(history.stack_size(), 1);
/// assert!(history.can_go_forward());
///
/// history.go_forward();
/// let current = history.current_location().unwrap();
/// assert_eq!(current.param::<Counter>(), Some(&1));
/// ```
pub struct NavHistory<S: PathSet> {
    stack: SignaledVec<Location<S>>,
    /// Oldest entry first.
    forward: RefCell<VecDeque<Location<S>>>,
}

impl<S: PathSet> Default for NavHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PathSet> NavHistory<S> {
    /// Create a history without a current location.
    pub fn new() -> Self {
        Self {
            stack: SignaledVec::new(),
            forward: RefCell::new(VecDeque::new()),
        }
    }

    /// Create a history whose stack starts with a single location.
    pub fn with_initial<P: Path<S>>(path: P, param: P::Param) -> Self {
        Self::with_location(Location::new(path, param))
    }

    /// Create a history whose stack starts with `location`.
    pub fn with_location(location: Location<S>) -> Self {
        Self {
            stack: SignaledVec::with_items([location]),
            forward: RefCell::new(VecDeque::new()),
        }
    }

    /// The number of locations on the stack, including the current one.
    pub fn stack_size(&self) -> usize {
        self.stack.len()
    }

    /// The current location, if the stack is not empty.
    pub fn current_location(&self) -> Option<Location<S>> {
        self.stack.last()
    }

    /// Whether going back would change the stack.
    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Whether going forward would change the stack.
    pub fn can_go_forward(&self) -> bool {
        !self.forward.borrow().is_empty()
    }

    /// The number of locations that can be reached by going forward.
    pub fn forward_len(&self) -> usize {
        self.forward.borrow().len()
    }

    /// Push a new location and drop the forward history.
    pub fn navigate_to<P: Path<S>>(&self, path: P, param: P::Param) {
        self.push(Location::new(path, param));
    }

    /// Push an already built location and drop the forward history.
    pub fn push(&self, location: Location<S>) {
        tracing::debug!(path = location.path(), "navigating");
        self.forward.borrow_mut().clear();
        self.stack.append([location]);
    }

    /// Overwrite the current location. The forward history is kept.
    pub fn replace_current<P: Path<S>>(
        &self,
        path: P,
        param: P::Param,
    ) -> Result<(), HistoryError> {
        self.replace(Location::new(path, param))
    }

    /// Overwrite the current location with an already built one. The forward history is kept.
    pub fn replace(&self, location: Location<S>) -> Result<(), HistoryError> {
        let path = location.path();
        if self.stack.replace_last(location).is_none() {
            tracing::warn!(path, "cannot replace the current location of an empty history");
            return Err(HistoryError::NoCurrentLocation);
        }

        tracing::debug!(path, "replaced current location");
        Ok(())
    }

    /// Go back a single location.
    pub fn go_back(&self) {
        self.go_back_by(1);
    }

    /// Go back up to `count` locations.
    ///
    /// Going back further than the start of the history empties the stack. Going back on an
    /// empty stack does nothing.
    pub fn go_back_by(&self, count: usize) {
        let count = count.min(self.stack.len());
        if count == 0 {
            return;
        }

        tracing::debug!(count, "going back");
        let removed = self.stack.remove_from_tail(count);
        let mut forward = self.forward.borrow_mut();
        for location in removed.into_iter().rev() {
            forward.push_front(location);
        }
    }

    /// Go forward a single location.
    pub fn go_forward(&self) {
        self.go_forward_by(1);
    }

    /// Go forward up to `count` locations. Does nothing when there is no forward history.
    pub fn go_forward_by(&self, count: usize) {
        let replayed: Vec<Location<S>> = {
            let mut forward = self.forward.borrow_mut();
            let count = count.min(forward.len());
            forward.drain(..count).collect()
        };
        if replayed.is_empty() {
            return;
        }

        tracing::debug!(count = replayed.len(), "going forward");
        self.stack.append(replayed);
    }

    /// Register `callback` to be called with the current location after every change of the
    /// stack. It receives [`None`] when the stack became empty.
    ///
    /// Changes of the forward history alone are not reported.
    pub fn on_current_location_changed(
        &self,
        callback: impl Fn(Option<&Location<S>>) + 'static,
    ) -> Subscription {
        self.stack
            .subscribe(move |changed: &Changed<Location<S>>| callback(changed.last()))
    }

    /// The number of registered callbacks.
    pub fn listener_count(&self) -> usize {
        self.stack.listener_count()
    }

    /// Get a handle that delivers this history's notifications.
    pub fn dispatcher(&self) -> Dispatcher<Changed<Location<S>>> {
        self.stack.dispatcher()
    }

    /// Deliver every pending notification, returning how many were delivered.
    pub fn flush(&self) -> usize {
        self.stack.dispatcher().flush()
    }
}

impl<S: PathSet> fmt::Debug for NavHistory<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavHistory")
            .field("stack", &self.stack)
            .field("forward", &self.forward.borrow())
            .finish()
    }
}
