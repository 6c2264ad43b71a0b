/// A view of a [`Switch`](crate::components::Switch) rendered in [`OutletMode::Stack`].
///
/// [`OutletMode::Stack`]: crate::OutletMode::Stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackedView<V> {
    /// The path of the route that produced the view.
    pub path: &'static str,
    /// The view, rendered with the last parameter the route was shown with.
    pub view: V,
    /// Whether the route belongs to the current location.
    pub active: bool,
}

/// What a [`Switch`](crate::components::Switch) renders for a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outlet<V> {
    /// The view of the current location, if a route matches it.
    Simple(Option<V>),

    /// Every visited route in registration order, the current one marked active.
    Stack(Vec<StackedView<V>>),
}

impl<V> Outlet<V> {
    /// The view of the current location.
    pub fn active(&self) -> Option<&V> {
        match self {
            Outlet::Simple(view) => view.as_ref(),
            Outlet::Stack(views) => views.iter().find(|view| view.active).map(|view| &view.view),
        }
    }

    /// Take the view of the current location.
    pub fn into_active(self) -> Option<V> {
        match self {
            Outlet::Simple(view) => view,
            Outlet::Stack(views) => views
                .into_iter()
                .find(|view| view.active)
                .map(|view| view.view),
        }
    }

    /// Whether nothing was rendered at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Outlet::Simple(view) => view.is_none(),
            Outlet::Stack(views) => views.is_empty(),
        }
    }
}
