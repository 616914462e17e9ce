pub mod aggregate;

pub use aggregate::{Job, JobId};
