pub mod company_profile;
pub mod dashboard;
pub mod home;
pub mod job_details;
pub mod login;
pub mod register;
pub mod saved_jobs;
pub mod verify_email;
