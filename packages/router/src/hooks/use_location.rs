use navstack_history::{Location, PathSet};

use crate::contexts::NavContext;

/// Get the location the surrounding provider is currently showing.
pub fn use_location<S: PathSet>(context: &NavContext<S>) -> Option<Location<S>> {
    context.location().cloned()
}
