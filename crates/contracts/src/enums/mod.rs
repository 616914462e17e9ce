pub mod application_status;
pub mod job_type;
pub mod work_mode;

pub use application_status::ApplicationStatus;
pub use job_type::JobType;
pub use work_mode::WorkMode;
