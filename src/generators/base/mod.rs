pub mod file_writer;
pub mod type_mapping;

pub use file_writer::FileWriter;
pub use type_mapping::binding_from_usage;
