use std::{any::Any, fmt::Debug, marker::PhantomData, rc::Rc};

use crate::{Path, PathSet};

/// A location parameter with its concrete type erased.
trait ErasedParam: Debug {
    fn as_any(&self) -> &dyn Any;

    fn eq_erased(&self, other: &dyn ErasedParam) -> bool;
}

impl<T: Debug + PartialEq + 'static> ErasedParam for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_erased(&self, other: &dyn ErasedParam) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// One navigable state: a path of the set `S` together with its parameter.
///
/// A location never changes after it is created. Cloning is cheap, the parameter is shared
/// between clones.
pub struct Location<S: PathSet> {
    path: &'static str,
    param: Rc<dyn ErasedParam>,
    _set: PhantomData<fn() -> S>,
}

impl<S: PathSet> Location<S> {
    /// Create a location for `path` carrying `param`.
    ///
    /// ```rust
    /// # use navstack_history::{paths, Location};
    /// paths! {
    ///     Paths {
    ///         Search => "/search" : String,
    ///     }
    /// }
    ///
    /// let location = Location::<Paths>::new(Search, "rust".to_string());
    /// assert_eq!(location.path(), "/search");
    /// assert_eq!(location.param::<Search>(), Some(&"rust".to_string()));
    /// ```
    pub fn new<P: Path<S>>(_path: P, param: P::Param) -> Self {
        Self {
            path: P::PATH,
            param: Rc::new(param),
            _set: PhantomData,
        }
    }

    /// The path identifier of this location.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Check whether this location points at `P`.
    pub fn is<P: Path<S>>(&self) -> bool {
        self.path == P::PATH && self.param.as_ref().as_any().is::<P::Param>()
    }

    /// Get the parameter if this location points at `P`.
    pub fn param<P: Path<S>>(&self) -> Option<&P::Param> {
        if self.path != P::PATH {
            return None;
        }
        self.param.as_ref().as_any().downcast_ref()
    }

    /// The parameter without its concrete type.
    pub fn param_any(&self) -> &dyn Any {
        self.param.as_ref().as_any()
    }
}

impl<S: PathSet> Clone for Location<S> {
    fn clone(&self) -> Self {
        Self {
            path: self.path,
            param: self.param.clone(),
            _set: PhantomData,
        }
    }
}

impl<S: PathSet> PartialEq for Location<S> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.param.as_ref().eq_erased(other.param.as_ref())
    }
}

impl<S: PathSet> Debug for Location<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Location")
            .field("path", &self.path)
            .field("param", &self.param)
            .finish()
    }
}
