//! Service Modules

pub mod description;
pub mod image_store;

pub use description::{DescriptionClient, DescriptionSubject};
pub use image_store::ImageStore;
