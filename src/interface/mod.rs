pub mod cli;
pub mod config;
pub mod output;

pub use cli::*;
pub use config::*;
pub use output::*;

use crate::analysis;
use crate::error::Result;
use crate::generators::{FileWriter, ProxyGenerator};
use std::fs;
use std::path::PathBuf;

/// Run one full generation pass from a validated configuration: parse both
/// input documents, emit the proxy classes, flush the two output files.
/// Returns the paths written.
pub fn generate_from_config(config: &config::GenerateConfig) -> Result<Vec<PathBuf>> {
    let logger = output::Logger::new(config.is_verbose());

    // Fail before any parsing or emission.
    config.validate()?;

    logger.verbose(&format!(
        "🔍 Reading interface nodes from: {}",
        config.ifacexml.display()
    ));
    let iface_xml = fs::read_to_string(&config.ifacexml)?;
    let interfaces = analysis::parse_interfaces(&iface_xml)?;

    if config.is_verbose() {
        logger.info(&format!("📋 Found {} interface node(s):", interfaces.len()));
        for iface in &interfaces {
            logger.verbose(&format!("  - {} ({})", iface.node_name, iface.dbus_name));
        }
    }

    if interfaces.is_empty() {
        logger.warning("No interface nodes found in the instantiation document.");
    }

    let spec_xml = fs::read_to_string(&config.specxml)?;
    let spec = analysis::parse_spec_index(&spec_xml)?;
    logger.verbose(&format!(
        "🏗️  Gathered {} custom list type(s) and {} external type(s)",
        spec.custom_lists.len(),
        spec.externals.len()
    ));

    let generator = ProxyGenerator::new(config, &spec);
    let proxies = generator.generate(&interfaces)?;

    let mut writer = FileWriter::new();
    writer.write_file(&config.headerfile, &proxies.header)?;
    writer.write_file(&config.implfile, &proxies.implementation)?;

    if config.is_verbose() {
        logger.info("✅ Successfully generated:");
        for file in writer.generated_files() {
            logger.verbose(&format!("  📄 {}", file.display()));
        }
    }

    Ok(writer.generated_files().to_vec())
}
