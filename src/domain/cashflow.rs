//! Income, side-income, and expense records that feed the monthly surplus.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::RecordStatus;

/// A primary income stream whose monthly amount is known as a range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeSource {
    pub id: Uuid,
    pub name: String,
    pub monthly_low: f64,
    pub monthly_high: f64,
    #[serde(default)]
    pub status: RecordStatus,
}

impl IncomeSource {
    pub fn new(name: impl Into<String>, monthly_low: f64, monthly_high: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            monthly_low,
            monthly_high,
            status: RecordStatus::Active,
        }
    }

    /// Salary-like income with no variance.
    pub fn fixed(name: impl Into<String>, monthly: f64) -> Self {
        Self::new(name, monthly, monthly)
    }

    /// Midpoint of the estimated monthly range.
    pub fn mid_monthly_estimate(&self) -> f64 {
        (self.monthly_low + self.monthly_high) / 2.0
    }
}

/// Earnings from a side project, counted at its current monthly run rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SideIncome {
    pub id: Uuid,
    pub name: String,
    pub current_monthly_earnings: f64,
    #[serde(default)]
    pub status: RecordStatus,
}

impl SideIncome {
    pub fn new(name: impl Into<String>, current_monthly_earnings: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            current_monthly_earnings,
            status: RecordStatus::Active,
        }
    }
}

/// A monthly recurring obligation such as rent or a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringExpense {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub status: RecordStatus,
}

impl RecurringExpense {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            status: RecordStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single non-recurring inflow or outflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OneTimeTransaction {
    pub id: Uuid,
    pub description: String,
    pub date: NaiveDate,
    /// Always positive; direction comes from `kind`.
    pub amount: f64,
    pub kind: TransactionKind,
}

impl OneTimeTransaction {
    pub fn income(description: impl Into<String>, date: NaiveDate, amount: f64) -> Self {
        Self::new(description, date, amount, TransactionKind::Income)
    }

    pub fn expense(description: impl Into<String>, date: NaiveDate, amount: f64) -> Self {
        Self::new(description, date, amount, TransactionKind::Expense)
    }

    fn new(
        description: impl Into<String>,
        date: NaiveDate,
        amount: f64,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            date,
            amount,
            kind,
        }
    }

    /// Positive for income, negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}
