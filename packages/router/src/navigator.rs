use std::rc::Rc;

use navstack_history::{NavHistory, Path, PathSet};

use crate::{
    components::Switch,
    contexts::NavProvider,
    router_cfg::{NavigatorConfig, OutletMode},
};

/// Everything an application needs to navigate between the paths of `S`.
///
/// The navigator owns the [`NavHistory`] and creates the pieces that read it: a [`NavProvider`]
/// for the current location and [`Switch`]es that map locations to views.
///
/// ```rust
/// use navstack_history::paths;
/// use navstack_router::prelude::*;
///
/// paths! {
///     Paths {
///         Home => "/" : (),
///         Profile => "/profile" : String,
///     }
/// }
///
/// let navigator = Navigator::<Paths>::with_initial(Home, ());
/// let provider = navigator.provider();
/// let switch = navigator.switch::<String>();
///
/// let _home = switch.register_route(Home, |_| "home".to_string()).unwrap();
/// let _profile = switch
///     .register_route(Profile, |name| format!("profile of {name}"))
///     .unwrap();
///
/// navigator.history().navigate_to(Profile, "ferris".to_string());
/// navigator.history().flush();
///
/// let outlet = switch.render(&provider.context());
/// assert_eq!(outlet.active().map(String::as_str), Some("profile of ferris"));
/// ```
pub struct Navigator<S: PathSet> {
    history: Rc<NavHistory<S>>,
    outlet_mode: OutletMode,
}

impl<S: PathSet> Default for Navigator<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PathSet> Navigator<S> {
    /// Create a navigator with an empty history.
    pub fn new() -> Self {
        Self::from_config(NavigatorConfig::default())
    }

    /// Create a navigator whose history starts at `path`.
    pub fn with_initial<P: Path<S>>(path: P, param: P::Param) -> Self {
        Self::from_config(NavigatorConfig::default().initial_location(path, param))
    }

    /// Create a navigator from a [`NavigatorConfig`].
    pub fn from_config(config: NavigatorConfig<S>) -> Self {
        let history = match config.initial {
            Some(location) => NavHistory::with_location(location),
            None => NavHistory::new(),
        };

        tracing::debug!(
            initial = history.current_location().map(|location| location.path()),
            outlet_mode = ?config.outlet_mode,
            "navigator created"
        );

        Self {
            history: Rc::new(history),
            outlet_mode: config.outlet_mode,
        }
    }

    /// The history shared by everything this navigator creates.
    pub fn history(&self) -> &Rc<NavHistory<S>> {
        &self.history
    }

    /// Create a provider that tracks the current location.
    pub fn provider(&self) -> NavProvider<S> {
        NavProvider::new(self.history.clone())
    }

    /// Create a switch using the configured [`OutletMode`].
    pub fn switch<V: 'static>(&self) -> Switch<S, V> {
        Switch::new(self.outlet_mode)
    }
}
