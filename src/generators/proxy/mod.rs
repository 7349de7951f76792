pub mod generator;
pub mod templates;

pub use generator::{GeneratedProxies, ProxyGenerator};
