//! Integration Tests Module
//!
//! End-to-end tests driving the assessment through the command layer:
//! the full intro-to-results flow with navigation, and compass export.

// Full assessment flow tests
mod assessment_flow_test;

// Compass export tests
mod export_test;
