pub mod base;
pub mod proxy;

pub use base::file_writer::FileWriter;
pub use base::type_mapping::binding_from_usage;
pub use proxy::{GeneratedProxies, ProxyGenerator};
