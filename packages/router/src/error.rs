/// An error raised while wiring routes together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// A [`Switch`](crate::components::Switch) already has a route for this path.
    #[error("route with path \"{path}\" already exists")]
    DuplicateRoute {
        /// The path that was registered twice.
        path: &'static str,
    },
}
