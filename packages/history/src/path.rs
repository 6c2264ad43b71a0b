use std::fmt::Debug;

/// A closed set of paths an application can navigate to.
///
/// Each member of the set is a type implementing [`Path`] for it. Use the [`paths!`](crate::paths)
/// macro to declare a set together with its members.
pub trait PathSet: 'static {
    /// Every path string that belongs to the set, in declaration order.
    const PATHS: &'static [&'static str];

    /// Check whether `path` is a member of the set.
    fn contains(path: &str) -> bool {
        Self::PATHS.iter().any(|known| *known == path)
    }
}

/// A single path of the [`PathSet`] `S`, bound to the shape of its parameter.
///
/// Navigating to a path with a parameter of another shape does not compile.
pub trait Path<S: PathSet>: 'static {
    /// The parameter carried by every location of this path.
    type Param: Debug + PartialEq + 'static;

    /// The path identifier.
    const PATH: &'static str;
}

/// Declare a [`PathSet`] and one zero-sized [`Path`] type per member.
///
/// ```rust
/// use navstack_history::{paths, Path, PathSet};
///
/// #[derive(Debug, PartialEq)]
/// pub struct UserParam {
///     pub id: u64,
/// }
///
/// paths! {
///     pub AppPaths {
///         Home => "/" : (),
///         User => "/user" : UserParam,
///     }
/// }
///
/// assert_eq!(AppPaths::PATHS, &["/", "/user"]);
/// assert_eq!(<User as Path<AppPaths>>::PATH, "/user");
/// assert!(AppPaths::contains("/"));
/// assert!(!AppPaths::contains("/missing"));
/// ```
#[macro_export]
macro_rules! paths {
    (
        $(#[$meta:meta])*
        $vis:vis $set:ident {
            $(
                $(#[$path_meta:meta])*
                $path:ident => $literal:literal : $param:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        $vis struct $set;

        impl $crate::PathSet for $set {
            const PATHS: &'static [&'static str] = &[$($literal),*];
        }

        $(
            $(#[$path_meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
            $vis struct $path;

            impl $crate::Path<$set> for $path {
                type Param = $param;
                const PATH: &'static str = $literal;
            }
        )*
    };
}
