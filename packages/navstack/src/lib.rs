#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub use navstack_history as history;
pub use navstack_router as router;

#[cfg(feature = "logger")]
pub mod logger;

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use navstack_history::{
        paths, Changed, Dispatcher, HistoryError, SequenceError, SignaledVec, Subscription,
    };
    pub use navstack_router::prelude::*;

    #[cfg(feature = "logger")]
    pub use crate::logger::LoggerError;
}
