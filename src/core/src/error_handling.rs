//! Error types shared by every subsystem.
//!
//! Each subsystem owns one enum in [`types`]; the controller folds them into
//! [`types::ControllerError`] so the binary has a single error to report.

pub mod types;
