//! # dbus-proxygen
//!
//! Generates Qt D-Bus client proxy classes from a Telepathy-style interface
//! specification.
//!
//! The generator reads two XML documents - one listing concrete object nodes
//! and the interfaces they implement, one carrying the semantic type
//! specification (`tp:` annotations) - and emits a header file of proxy class
//! declarations plus the matching implementation file, namespace-wrapped,
//! with one `QDBusAbstractInterface` subclass per interface.
//!
//! ## Features
//!
//! - 📝 **Proxy classes**: one class per interface node, with
//!   `staticInterfaceName()` and the standard constructor set
//! - 🔗 **Main-interface delegation**: subordinate interfaces get
//!   constructors that borrow service, path and connection from a designated
//!   main interface proxy
//! - 🏷️ **Property bindings**: `Q_PROPERTY` declarations with inline
//!   getters/setters derived from wire signatures and `tp:type` annotations
//! - 📋 **Stable output**: main interface first, everything else in
//!   lexicographic order; identical inputs produce byte-identical output
//!
//! ## Quick Start
//!
//! ### As a CLI Tool
//!
//! ```bash
//! dbus-proxygen generate \
//!     --group connection \
//!     --namespace Tp::Client \
//!     --headerfile gen/cli-connection.h \
//!     --implfile gen/cli-connection-body.hpp \
//!     --ifacexml spec/connection-ifaces.xml \
//!     --specxml spec/connection.xml \
//!     --realinclude gen/cli-connection.h \
//!     --prettyinclude Connection \
//!     --typesinclude gen/types.h \
//!     --mainiface /Connection
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,no_run
//! use dbus_proxygen::{generate_from_config, GenerateConfig};
//!
//! let config = GenerateConfig::from_file("proxygen.json")?;
//! let files = generate_from_config(&config)?;
//! # Ok::<(), dbus_proxygen::Error>(())
//! ```

pub mod analysis;
mod error;
pub mod generators;
pub mod interface;
pub mod models;

pub use error::{Error, Result};
pub use models::*;

// Convenience re-exports for common use cases
pub use generators::{GeneratedProxies, ProxyGenerator};
pub use interface::config::GenerateConfig;
pub use interface::generate_from_config;
pub use interface::output::{Logger, ProgressReporter};
