//! Commands Layer
//!
//! Operations the front end invokes. Each takes the shared `AppState` and
//! the caller's explicit `Session`.

mod account_cmd;
mod item_cmd;
mod capture_cmd;
mod notification_cmd;
mod dashboard_cmd;

#[cfg(test)]
mod test_support;

pub use account_cmd::*;
pub use item_cmd::*;
pub use capture_cmd::*;
pub use notification_cmd::*;
pub use dashboard_cmd::*;
