pub mod common;
pub mod a001_job;
pub mod a002_company;
pub mod a003_application;
