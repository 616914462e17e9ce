//! PostgREST / GoTrue request encoding for the hosted backend

pub mod config;
pub mod encode;
pub mod paths;

pub use config::{Prefer, RestConfig};
pub use encode::{to_query_params, to_query_string};
