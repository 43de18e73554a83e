use serde::{Deserialize, Serialize};

/// Lifecycle flag shared by income, side-income, and expense records.
///
/// Only `Active` records contribute to monthly totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    Active,
    Paused,
    Archived,
}

impl RecordStatus {
    pub fn is_active(self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}
