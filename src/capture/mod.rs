//! Capture module
//!
//! Simulated camera shutter and the gallery upload path (photo.rs).

pub mod photo;
