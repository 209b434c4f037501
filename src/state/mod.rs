//! State management module
//!
//! This module holds all application state:
//! - Shared data structures and fixed content (data.rs)
//! - The screen-flow state machine (session.rs)
//! - The submitted sighting record (report.rs)

pub mod data;
pub mod report;
pub mod session;
