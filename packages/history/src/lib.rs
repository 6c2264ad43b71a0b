#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod emitter;
mod error;
mod history;
mod location;
mod path;
mod signaled_vec;

pub use emitter::{Dispatcher, Emitter, Subscription};
pub use error::{HistoryError, SequenceError};
pub use history::NavHistory;
pub use location::Location;
pub use path::{Path, PathSet};
pub use signaled_vec::{Changed, SignaledVec};
