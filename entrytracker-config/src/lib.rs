//! Configuration for the field registry
//!
//! Settings are merged with Figment from, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `~/.entrytracker/config.{toml,yaml,yml,json}`
//! 3. `./.entrytracker/config.{toml,yaml,yml,json}`
//! 4. `ENTRYTRACKER_*` environment variables
//!
//! ```rust,ignore
//! let config = ConfigProvider::new().load()?;
//! config.init_logging();
//! let tracker = config.build_registry();
//! ```

pub mod discovery;
pub mod error;
pub mod provider;
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::{ConfigError, ConfigResult};
pub use provider::{ConfigProvider, ENV_PREFIX};
pub use types::TrackerConfig;
