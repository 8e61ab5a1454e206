//! Application Services

pub mod assessment;

pub use assessment::AssessmentService;
