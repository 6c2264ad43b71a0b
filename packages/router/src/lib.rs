#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod error;
mod navigator;
mod router_cfg;

pub use error::RouterError;
pub use navigator::Navigator;
pub use router_cfg::{NavigatorConfig, OutletMode};

/// Components mapping locations to views.
pub mod components {
    mod outlet;
    pub use outlet::*;

    mod switch;
    pub use switch::*;
}

/// Contexts handed from a provider to the components below it.
pub mod contexts {
    mod navigation;
    pub use navigation::*;
}

/// Hooks for reading and driving navigation from components.
pub mod hooks {
    mod use_current_location;
    pub use use_current_location::*;

    mod use_history;
    pub use use_history::*;

    mod use_location;
    pub use use_location::*;
}

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::components::*;
    pub use crate::contexts::*;
    pub use crate::hooks::*;
    pub use crate::{Navigator, NavigatorConfig, OutletMode, RouterError};
    pub use navstack_history::{Location, NavHistory, Path, PathSet};
}
