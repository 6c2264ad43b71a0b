use navstack_history::{Location, Path, PathSet};

/// How a [`Switch`](crate::components::Switch) lays out its routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutletMode {
    /// Keep every visited route around, each with the last parameter it was shown with.
    #[default]
    Stack,

    /// Only render the route of the current location.
    Simple,
}

/// Global configuration options for a [`Navigator`](crate::Navigator).
///
/// This implements [`Default`] and follows the builder pattern, so you can use it like this:
/// ```rust
/// # use navstack_history::paths;
/// # use navstack_router::prelude::*;
/// paths! {
///     Paths {
///         Home => "/" : (),
///     }
/// }
///
/// let cfg = NavigatorConfig::<Paths>::default()
///     .initial_location(Home, ())
///     .outlet_mode(OutletMode::Simple);
///
/// let navigator = Navigator::from_config(cfg);
/// assert_eq!(navigator.history().stack_size(), 1);
/// ```
pub struct NavigatorConfig<S: PathSet> {
    pub(crate) initial: Option<Location<S>>,
    pub(crate) outlet_mode: OutletMode,
}

impl<S: PathSet> Default for NavigatorConfig<S> {
    fn default() -> Self {
        Self {
            initial: None,
            outlet_mode: OutletMode::default(),
        }
    }
}

impl<S: PathSet> NavigatorConfig<S> {
    /// The location the history starts at.
    ///
    /// Defaults to [`None`], an empty history.
    pub fn initial_location<P: Path<S>>(self, path: P, param: P::Param) -> Self {
        Self {
            initial: Some(Location::new(path, param)),
            ..self
        }
    }

    /// The layout of every [`Switch`](crate::components::Switch) created by the navigator.
    ///
    /// Defaults to [`OutletMode::Stack`].
    pub fn outlet_mode(self, outlet_mode: OutletMode) -> Self {
        Self {
            outlet_mode,
            ..self
        }
    }
}
