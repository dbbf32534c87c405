//! Clear-confirmation flow.

use serde::{Deserialize, Serialize};

/// Outcome of the most recent clear interaction.
///
/// The flow is `Idle -> ConfirmPending -> Cleared | Cancelled`. The ledger
/// itself only offers an unconditional clear; this flag gates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearState {
    /// No clear requested.
    #[default]
    Idle,
    /// Clear requested, waiting for confirm or cancel.
    ConfirmPending,
    /// Ledger was cleared.
    Cleared,
    /// Pending clear was cancelled.
    Cancelled,
}

impl ClearState {
    /// Returns true while a confirmation is outstanding.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::ConfirmPending)
    }
}
