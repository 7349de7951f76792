use crate::interface::config::GenerateConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dbus-proxygen")]
#[command(about = "Generate Qt D-Bus client proxy classes from spec XML")]
pub struct Cli {
    #[command(subcommand)]
    pub command: ProxygenCommands,
}

#[derive(Subcommand)]
pub enum ProxygenCommands {
    /// Generate proxy class declarations and definitions
    Generate {
        /// Logical grouping label for the generated classes
        #[arg(long)]
        group: String,

        /// Namespace path (::-delimited) wrapped around the declarations
        #[arg(long)]
        namespace: String,

        /// Output path for the generated header
        #[arg(long)]
        headerfile: PathBuf,

        /// Output path for the generated implementation
        #[arg(long)]
        implfile: PathBuf,

        /// Object/interface instantiation XML document
        #[arg(long)]
        ifacexml: PathBuf,

        /// Semantic specification XML document
        #[arg(long)]
        specxml: PathBuf,

        /// Include path of the generated header, used by the implementation
        #[arg(long)]
        realinclude: String,

        /// Public-facing include path
        #[arg(long)]
        prettyinclude: String,

        /// Type-definitions include path, emitted in the header
        #[arg(long)]
        typesinclude: String,

        /// Node name of the interface to privilege as primary/base
        #[arg(long)]
        mainiface: Option<String>,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,
    },
}

impl From<&ProxygenCommands> for GenerateConfig {
    fn from(cmd: &ProxygenCommands) -> Self {
        match cmd {
            ProxygenCommands::Generate {
                group,
                namespace,
                headerfile,
                implfile,
                ifacexml,
                specxml,
                realinclude,
                prettyinclude,
                typesinclude,
                mainiface,
                verbose,
            } => GenerateConfig {
                group: group.clone(),
                namespace: namespace.clone(),
                headerfile: headerfile.clone(),
                implfile: implfile.clone(),
                ifacexml: ifacexml.clone(),
                specxml: specxml.clone(),
                realinclude: realinclude.clone(),
                prettyinclude: prettyinclude.clone(),
                typesinclude: typesinclude.clone(),
                mainiface: mainiface.clone(),
                verbose: Some(*verbose),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_command() -> ProxygenCommands {
        ProxygenCommands::Generate {
            group: "client".to_string(),
            namespace: "Tp::Client".to_string(),
            headerfile: PathBuf::from("out/proxies.h"),
            implfile: PathBuf::from("out/proxies.cpp"),
            ifacexml: PathBuf::from("spec/ifaces.xml"),
            specxml: PathBuf::from("spec/spec.xml"),
            realinclude: "gen/proxies.h".to_string(),
            prettyinclude: "Proxies".to_string(),
            typesinclude: "gen/types.h".to_string(),
            mainiface: Some("/Connection".to_string()),
            verbose: false,
        }
    }

    #[test]
    fn test_config_from_cli() {
        let config = GenerateConfig::from(&generate_command());
        assert_eq!(config.group, "client");
        assert_eq!(config.namespace, "Tp::Client");
        assert_eq!(config.headerfile, PathBuf::from("out/proxies.h"));
        assert_eq!(config.mainiface.as_deref(), Some("/Connection"));
        assert!(!config.is_verbose());
    }

    #[test]
    fn test_missing_required_option_names_it() {
        // Everything but --specxml.
        let result = Cli::try_parse_from([
            "dbus-proxygen",
            "generate",
            "--group",
            "client",
            "--namespace",
            "Tp",
            "--headerfile",
            "out/proxies.h",
            "--implfile",
            "out/proxies.cpp",
            "--ifacexml",
            "spec/ifaces.xml",
            "--realinclude",
            "gen/proxies.h",
            "--prettyinclude",
            "Proxies",
            "--typesinclude",
            "gen/types.h",
        ]);

        let err = result.err().expect("missing --specxml must fail");
        assert!(err.to_string().contains("--specxml"));
    }

    #[test]
    fn test_mainiface_is_optional() {
        let cli = Cli::try_parse_from([
            "dbus-proxygen",
            "generate",
            "--group",
            "client",
            "--namespace",
            "Tp",
            "--headerfile",
            "out/proxies.h",
            "--implfile",
            "out/proxies.cpp",
            "--ifacexml",
            "spec/ifaces.xml",
            "--specxml",
            "spec/spec.xml",
            "--realinclude",
            "gen/proxies.h",
            "--prettyinclude",
            "Proxies",
            "--typesinclude",
            "gen/types.h",
        ])
        .unwrap();

        let config = GenerateConfig::from(&cli.command);
        assert_eq!(config.mainiface, None);
    }
}
