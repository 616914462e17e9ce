pub mod filter_panel;
pub mod job_card;
pub mod ui;

pub use filter_panel::JobFilterPanel;
pub use job_card::JobCard;
