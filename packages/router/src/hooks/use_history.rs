use std::rc::Rc;

use navstack_history::{NavHistory, PathSet};

use crate::contexts::NavContext;

/// Get the history of the surrounding navigator, to navigate from inside a component.
pub fn use_history<S: PathSet>(context: &NavContext<S>) -> Rc<NavHistory<S>> {
    context.history().clone()
}
