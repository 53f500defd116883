//! Intent routing

pub mod registry;

pub use registry::{HandlerRegistry, RegistryBuilder};
