//! Savings, debt, and investment goals read by the projection engine.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ProjectionError;

pub const MIN_URGENCY: u8 = 1;
pub const MAX_URGENCY: u8 = 5;
pub const DEFAULT_URGENCY: u8 = 3;

fn default_urgency() -> u8 {
    DEFAULT_URGENCY
}

/// A user-owned financial goal. The engine treats these as read-only input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub category: GoalCategory,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    /// Defaults to the current month when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub deadline: NaiveDate,
    #[serde(default = "default_urgency")]
    pub urgency_score: u8,
    /// Annual percentage; only meaningful for [`GoalCategory::Investment`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(default)]
    pub status: GoalStatus,
}

impl Goal {
    pub fn new(
        title: impl Into<String>,
        category: GoalCategory,
        target_amount: f64,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            category,
            target_amount,
            current_amount: 0.0,
            start_date: None,
            deadline,
            urgency_score: DEFAULT_URGENCY,
            interest_rate: None,
            status: GoalStatus::Active,
        }
    }

    pub fn with_current_amount(mut self, amount: f64) -> Self {
        self.current_amount = amount;
        self
    }

    pub fn with_start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn with_urgency(mut self, urgency: u8) -> Self {
        self.urgency_score = urgency;
        self
    }

    pub fn with_interest_rate(mut self, annual_percent: f64) -> Self {
        self.interest_rate = Some(annual_percent);
        self
    }

    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }

    /// Checks the invariants the owning collaborator is responsible for.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !(self.target_amount.is_finite() && self.target_amount > 0.0) {
            return Err(ProjectionError::InvalidInput(format!(
                "goal `{}` must have a positive target amount",
                self.title
            )));
        }
        if !(self.current_amount.is_finite() && self.current_amount >= 0.0) {
            return Err(ProjectionError::InvalidInput(format!(
                "goal `{}` has a negative current amount",
                self.title
            )));
        }
        if !(MIN_URGENCY..=MAX_URGENCY).contains(&self.urgency_score) {
            return Err(ProjectionError::InvalidInput(format!(
                "goal `{}` urgency must be between {} and {}",
                self.title, MIN_URGENCY, MAX_URGENCY
            )));
        }
        if let Some(rate) = self.interest_rate {
            if !rate.is_finite() {
                return Err(ProjectionError::InvalidInput(format!(
                    "goal `{}` has a non-numeric interest rate",
                    self.title
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Emergency,
    Vacation,
    Car,
    House,
    Debt,
    Investment,
    Other,
}

impl GoalCategory {
    /// Only investment goals accrue growth on their balance.
    pub fn compounds(self) -> bool {
        matches!(self, GoalCategory::Investment)
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalCategory::Emergency => "emergency",
            GoalCategory::Vacation => "vacation",
            GoalCategory::Car => "car",
            GoalCategory::House => "house",
            GoalCategory::Debt => "debt",
            GoalCategory::Investment => "investment",
            GoalCategory::Other => "other",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    #[default]
    Active,
    Paused,
    Completed,
    Archived,
}
