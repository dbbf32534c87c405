//! Session layer.
//!
//! Explicit handlers (`on_add_trade`, `on_clear`, `confirm_clear`,
//! `cancel_clear`) replace ambient per-session state, and a separate read
//! path recomputes statistics on demand.

mod clear;
mod journal;
mod request;

pub use clear::ClearState;
pub use journal::JournalSession;
pub use request::AddTradeRequest;
