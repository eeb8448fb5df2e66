// Core advice exports
pub mod activity;
pub mod advisor;
pub mod assessment;
pub mod development;
pub mod exercise;
pub mod knowledge;
pub mod nutrition;
pub mod qa;
pub mod report;

pub use advisor::Advisor;
pub use assessment::{age_stage, assess, health_flags, sleep_status, weight_status};
pub use qa::{popular_questions, QaEngine};
pub use report::{render_report, report_filename, share_text};
