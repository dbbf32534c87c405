//! Observability: tracing subscriber setup and structured journal events.

mod events;
mod subscriber;

pub use events::{
    log_clear_transition, log_statistics_summary, log_trade_accepted, log_trade_rejected,
};
pub use subscriber::{build_env_filter, init_tracing};
