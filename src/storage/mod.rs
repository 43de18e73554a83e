pub mod json_backend;

use crate::errors::Result;

pub use json_backend::{
    load_scenario_from_path, save_scenario_to_path, JsonScenarioStore, Scenario,
};

/// Abstraction over backends that persist named scenarios.
pub trait ScenarioStore: Send + Sync {
    fn save(&self, scenario: &Scenario, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Scenario>;
    fn list(&self) -> Result<Vec<String>>;
}
