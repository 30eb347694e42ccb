//! Core business logic for s3env

pub mod locator;
pub mod registry;

pub use locator::RemoteLocator;
pub use registry::{EnvironmentConfig, Registry};
