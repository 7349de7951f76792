use clap::Parser;
use dbus_proxygen::analysis;
use dbus_proxygen::generators::{FileWriter, ProxyGenerator};
use dbus_proxygen::interface::cli::{Cli, ProxygenCommands};
use dbus_proxygen::interface::output::{print_generation_summary, Logger, ProgressReporter};
use dbus_proxygen::GenerateConfig;
use std::fs;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        ProxygenCommands::Generate { .. } => {
            let config = GenerateConfig::from(&cli.command);
            if let Err(e) = run_generate(&config) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_generate(config: &GenerateConfig) -> dbus_proxygen::Result<()> {
    let logger = Logger::new(config.is_verbose());
    let mut progress = ProgressReporter::new(logger.clone(), 4);

    progress.start_step("Validating configuration");
    if let Err(e) = config.validate() {
        progress.fail_step(&e.to_string());
        return Err(e);
    }
    progress.complete_step(None);

    progress.start_step("Parsing interface definitions");
    let iface_xml = fs::read_to_string(&config.ifacexml)?;
    let interfaces = analysis::parse_interfaces(&iface_xml)?;
    let spec_xml = fs::read_to_string(&config.specxml)?;
    let spec = analysis::parse_spec_index(&spec_xml)?;
    progress.complete_step(Some(&format!("{} interface node(s)", interfaces.len())));

    if config.is_verbose() {
        for iface in &interfaces {
            logger.verbose(&format!("  - {} ({})", iface.node_name, iface.dbus_name));
        }
    }

    progress.start_step("Generating proxy classes");
    let generator = ProxyGenerator::new(config, &spec);
    let proxies = match generator.generate(&interfaces) {
        Ok(proxies) => proxies,
        Err(e) => {
            progress.fail_step(&e.to_string());
            return Err(e);
        }
    };
    progress.complete_step(None);

    progress.start_step("Writing output files");
    let mut writer = FileWriter::new();
    writer.write_file(&config.headerfile, &proxies.header)?;
    writer.write_file(&config.implfile, &proxies.implementation)?;
    progress.complete_step(None);

    progress.finish(&format!(
        "Generated proxies for group '{}'",
        config.group
    ));
    print_generation_summary(&config.headerfile, &config.implfile, interfaces.len());

    Ok(())
}
