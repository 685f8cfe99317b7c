//! Catalog Module
//!
//! Menu deployment: copies the draft catalog into the deployed tables
//! customers read from.

pub mod deploy;

pub use deploy::{DeployReport, DeployService};
