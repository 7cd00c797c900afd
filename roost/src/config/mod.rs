//! Layered configuration.
//!
//! Settings come from YAML files and `ROOST_*` environment variables and
//! are merged by [`ConfigBuilder`]. Precedence, highest first:
//!
//! 1. Programmatic overrides (`ConfigBuilder::with_config`)
//! 2. Environment variables
//! 3. Project config (`roost.yaml`, nearest ancestor of the working directory)
//! 4. User config (`{data_dir}/config.yaml`)
//! 5. Built-in defaults
//!
//! ```yaml
//! update_overlap: exclude-self
//! maximum_lock_wait_seconds: 5
//! disable_autoinit: false
//! output_format: table
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use schema::{Config, OutputFormat};
