pub mod aggregate;
pub mod stats;

pub use aggregate::{Application, ApplicationCompany, ApplicationJob, NewApplication};
pub use stats::ApplicationStats;
