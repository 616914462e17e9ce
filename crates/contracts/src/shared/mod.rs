pub mod constants;
pub mod debounce;
pub mod filter;
pub mod rest;
pub mod saved_jobs;
