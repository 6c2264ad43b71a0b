use std::rc::Rc;

use navstack_history::{Location, NavHistory, PathSet};

use crate::hooks::{use_current_location, CurrentLocation};

/// What a [`NavProvider`] hands to the components below it: the shared history and the location
/// it was at when the context was taken.
pub struct NavContext<S: PathSet> {
    history: Rc<NavHistory<S>>,
    location: Option<Location<S>>,
}

impl<S: PathSet> NavContext<S> {
    /// The history every component of the tree navigates with.
    pub fn history(&self) -> &Rc<NavHistory<S>> {
        &self.history
    }

    /// The current location as observed by the provider.
    pub fn location(&self) -> Option<&Location<S>> {
        self.location.as_ref()
    }
}

impl<S: PathSet> Clone for NavContext<S> {
    fn clone(&self) -> Self {
        Self {
            history: self.history.clone(),
            location: self.location.clone(),
        }
    }
}

impl<S: PathSet> std::fmt::Debug for NavContext<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavContext")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

/// Keeps track of the current location of a history and provides [`NavContext`]s.
///
/// The tracked location follows the history's notifications, so it only moves once they have
/// been delivered.
pub struct NavProvider<S: PathSet> {
    history: Rc<NavHistory<S>>,
    current: CurrentLocation<S>,
}

impl<S: PathSet> NavProvider<S> {
    /// Start tracking `history`.
    pub fn new(history: Rc<NavHistory<S>>) -> Self {
        let current = use_current_location(&history);
        Self { history, current }
    }

    /// Take a context for the current state.
    pub fn context(&self) -> NavContext<S> {
        NavContext {
            history: self.history.clone(),
            location: self.current.get(),
        }
    }
}
