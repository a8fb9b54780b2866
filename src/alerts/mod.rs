//! Alert module
//!
//! Append-only, capacity-bounded history of raised signals

mod history;
mod types;

pub use history::AlertLog;
pub use types::{AlertItem, AlertKind, NewAlert};
