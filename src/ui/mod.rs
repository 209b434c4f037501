//! Screen views
//!
//! One module per screen of the reporting flow. Views are pure functions
//! over the session state; every interaction is a `Message` handled in
//! main.rs.

pub mod capture;
pub mod form;
pub mod onboarding;
pub mod splash;
pub mod success;
