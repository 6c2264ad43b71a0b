use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use navstack_history::{Location, Path, PathSet};

use crate::{
    components::{Outlet, StackedView},
    contexts::NavContext,
    router_cfg::OutletMode,
    RouterError,
};

type RenderFn<S, V> = Rc<dyn Fn(&Location<S>) -> Option<V>>;

struct RegisteredRoute<S: PathSet, V> {
    id: u64,
    path: &'static str,
    render: RenderFn<S, V>,
    /// The last location of this route the switch rendered.
    last_known: Option<Location<S>>,
}

trait RouteRegistry {
    fn unregister(&self, id: u64) -> bool;
}

impl<S: PathSet, V> RouteRegistry for RefCell<Vec<RegisteredRoute<S, V>>> {
    fn unregister(&self, id: u64) -> bool {
        let mut routes = self.borrow_mut();
        let before = routes.len();
        routes.retain(|route| route.id != id);
        routes.len() != before
    }
}

/// Maps the current location to the view of the route registered for its path.
///
/// Routes are matched by exact path equality. Each path can only be registered once per switch.
pub struct Switch<S: PathSet, V: 'static> {
    mode: OutletMode,
    routes: Rc<RefCell<Vec<RegisteredRoute<S, V>>>>,
    next_id: Cell<u64>,
}

impl<S: PathSet, V: 'static> Switch<S, V> {
    /// Create a switch without routes.
    pub fn new(mode: OutletMode) -> Self {
        Self {
            mode,
            routes: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        }
    }

    /// The layout this switch renders with.
    pub fn mode(&self) -> OutletMode {
        self.mode
    }

    /// Register `component` as the view of `path`.
    ///
    /// Fails if the path already has a route. The route stays registered until
    /// [`RouteHandle::unregister`] is called.
    pub fn register_route<P: Path<S>>(
        &self,
        _path: P,
        component: impl Fn(&P::Param) -> V + 'static,
    ) -> Result<RouteHandle, RouterError> {
        let mut routes = self.routes.borrow_mut();
        if routes.iter().any(|route| route.path == P::PATH) {
            tracing::error!(path = P::PATH, "route registered twice");
            return Err(RouterError::DuplicateRoute { path: P::PATH });
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);

        routes.push(RegisteredRoute {
            id,
            path: P::PATH,
            render: Rc::new(move |location: &Location<S>| {
                location.param::<P>().map(|param| component(param))
            }),
            last_known: None,
        });
        tracing::trace!(path = P::PATH, "route registered");

        let registry: Rc<dyn RouteRegistry> = self.routes.clone();
        Ok(RouteHandle {
            registry: Rc::downgrade(&registry),
            id,
            path: P::PATH,
        })
    }

    /// The registered paths, in registration order.
    pub fn paths(&self) -> Vec<&'static str> {
        self.routes.borrow().iter().map(|route| route.path).collect()
    }

    /// Render the location of `context`.
    pub fn render(&self, context: &NavContext<S>) -> Outlet<V> {
        self.render_location(context.location())
    }

    /// Render `location` according to the switch's [`OutletMode`].
    ///
    /// The matching route remembers `location`, which is what [`OutletMode::Stack`] shows for
    /// it once the history has moved on.
    pub fn render_location(&self, location: Option<&Location<S>>) -> Outlet<V> {
        self.remember(location);

        match self.mode {
            OutletMode::Simple => Outlet::Simple(self.simple_outlet(location)),
            OutletMode::Stack => Outlet::Stack(self.stack_outlet(location)),
        }
    }

    fn remember(&self, location: Option<&Location<S>>) {
        let Some(location) = location else {
            return;
        };
        let mut routes = self.routes.borrow_mut();
        if let Some(route) = routes
            .iter_mut()
            .find(|route| route.path == location.path())
        {
            route.last_known = Some(location.clone());
        }
    }

    fn simple_outlet(&self, location: Option<&Location<S>>) -> Option<V> {
        let location = location?;
        let render = self
            .routes
            .borrow()
            .iter()
            .find(|route| route.path == location.path())
            .map(|route| route.render.clone());

        // components run without the route list borrowed so they may register routes
        match render {
            Some(render) => render(location),
            None => {
                tracing::trace!(path = location.path(), "no route for location");
                None
            }
        }
    }

    fn stack_outlet(&self, location: Option<&Location<S>>) -> Vec<StackedView<V>> {
        let visited: Vec<(&'static str, RenderFn<S, V>, Location<S>)> = self
            .routes
            .borrow()
            .iter()
            .filter_map(|route| {
                let last_known = route.last_known.clone()?;
                Some((route.path, route.render.clone(), last_known))
            })
            .collect();

        visited
            .into_iter()
            .filter_map(|(path, render, last_known)| {
                let view = render(&last_known)?;
                Some(StackedView {
                    path,
                    view,
                    active: location.is_some_and(|location| location.path() == path),
                })
            })
            .collect()
    }
}

impl<S: PathSet, V: 'static> fmt::Debug for Switch<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("mode", &self.mode)
            .field("paths", &self.paths())
            .finish()
    }
}

/// The handle returned by [`Switch::register_route`].
///
/// Dropping the handle keeps the route registered.
pub struct RouteHandle {
    registry: Weak<dyn RouteRegistry>,
    id: u64,
    path: &'static str,
}

impl RouteHandle {
    /// The path of the route.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Remove the route from its switch.
    ///
    /// Returns `false` if the switch was already dropped.
    pub fn unregister(self) -> bool {
        let removed = self
            .registry
            .upgrade()
            .is_some_and(|registry| registry.unregister(self.id));
        tracing::trace!(path = self.path, removed, "route unregistered");
        removed
    }
}

impl fmt::Debug for RouteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteHandle")
            .field("path", &self.path)
            .finish()
    }
}
