//! Command Layer
//!
//! One module per concern; thin named functions over the app state so the
//! transition table can be exercised directly by tests and by any shell.

pub mod assessment;
pub mod export;
