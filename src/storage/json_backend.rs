use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::{tmp_path, write_atomic},
    domain::{
        month::month_index, Goal, IncomeSource, OneTimeTransaction, RecurringExpense, SideIncome,
    },
    errors::{ProjectionError, Result},
    services::FinanceSource,
};

use super::ScenarioStore;

const SCENARIO_EXTENSION: &str = "json";

/// Every record a projection reads, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub income_sources: Vec<IncomeSource>,
    #[serde(default)]
    pub side_incomes: Vec<SideIncome>,
    #[serde(default)]
    pub recurring_expenses: Vec<RecurringExpense>,
    #[serde(default)]
    pub one_time_transactions: Vec<OneTimeTransaction>,
}

impl Scenario {
    /// Rejects records the engine assumes are well formed.
    pub fn validate(&self) -> Result<()> {
        for goal in &self.goals {
            goal.validate()?;
        }
        for source in &self.income_sources {
            let finite = source.monthly_low.is_finite() && source.monthly_high.is_finite();
            if !finite || source.monthly_low < 0.0 || source.monthly_high < source.monthly_low {
                return Err(ProjectionError::InvalidInput(format!(
                    "income source `{}` has an invalid monthly range",
                    source.name
                )));
            }
        }
        for side in &self.side_incomes {
            ensure_non_negative(&side.name, side.current_monthly_earnings)?;
        }
        for expense in &self.recurring_expenses {
            ensure_non_negative(&expense.name, expense.amount)?;
        }
        for txn in &self.one_time_transactions {
            ensure_non_negative(&txn.description, txn.amount)?;
        }
        Ok(())
    }
}

fn ensure_non_negative(name: &str, amount: f64) -> Result<()> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(ProjectionError::InvalidInput(format!(
            "`{}` must have a non-negative amount",
            name
        )))
    }
}

impl FinanceSource for Scenario {
    fn active_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.goals.iter().filter(|goal| goal.is_active()).cloned().collect())
    }

    fn active_recurring_expenses(&self) -> Result<Vec<RecurringExpense>> {
        Ok(self
            .recurring_expenses
            .iter()
            .filter(|expense| expense.status.is_active())
            .cloned()
            .collect())
    }

    fn active_income_sources(&self) -> Result<Vec<IncomeSource>> {
        Ok(self
            .income_sources
            .iter()
            .filter(|source| source.status.is_active())
            .cloned()
            .collect())
    }

    fn active_side_incomes(&self) -> Result<Vec<SideIncome>> {
        Ok(self
            .side_incomes
            .iter()
            .filter(|side| side.status.is_active())
            .cloned()
            .collect())
    }

    fn one_time_transactions(&self, month: NaiveDate) -> Result<Vec<OneTimeTransaction>> {
        Ok(self
            .one_time_transactions
            .iter()
            .filter(|txn| month_index(month, txn.date) == 0)
            .cloned()
            .collect())
    }
}

/// Directory of named scenario files.
#[derive(Debug, Clone)]
pub struct JsonScenarioStore {
    root: PathBuf,
}

impl JsonScenarioStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn scenario_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(name), SCENARIO_EXTENSION))
    }
}

impl ScenarioStore for JsonScenarioStore {
    fn save(&self, scenario: &Scenario, name: &str) -> Result<()> {
        save_scenario_to_path(scenario, &self.scenario_path(name))
    }

    fn load(&self, name: &str) -> Result<Scenario> {
        let path = self.scenario_path(name);
        if !path.exists() {
            return Err(ProjectionError::InvalidInput(format!(
                "scenario `{}` not found",
                name
            )));
        }
        load_scenario_from_path(&path)
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SCENARIO_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Reads and validates a scenario file.
pub fn load_scenario_from_path(path: &Path) -> Result<Scenario> {
    let data = fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&data)?;
    scenario.validate()?;
    Ok(scenario)
}

/// Writes a scenario through a temp file so readers never see a partial file.
pub fn save_scenario_to_path(scenario: &Scenario, path: &Path) -> Result<()> {
    scenario.validate()?;
    let json = serde_json::to_string_pretty(scenario)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn canonical_name(name: &str) -> String {
    let mut canonical = String::new();
    let mut last_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            canonical.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !canonical.is_empty() && !last_dash {
            canonical.push('-');
            last_dash = true;
        }
    }
    let trimmed = canonical.trim_matches('-');
    if trimmed.is_empty() {
        "scenario".into()
    } else {
        trimmed.to_string()
    }
}
