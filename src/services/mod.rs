pub mod clock;
pub mod projection_service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use projection_service::{FinanceSource, GatheredInputs, ProjectionService};
