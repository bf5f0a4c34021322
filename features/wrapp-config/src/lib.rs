//! Wrapp Config provides a registry of configs that can be injected in the rest of the
//! application.
//!
//! Wrapp Config is split into two major parts:
//! 1. ConfigProvider: Used to create the registry of all configs and install it into a builder
//! 2. Config<T>: A wrapper type to take a config as constructor parameter
//!
//! # Examples
//!
//! ```rust
//! use wrapp_config::provider::ConfigProvider;
//!
//! struct AppConfig {
//!     host: String,
//!     port: u16,
//! }
//!
//! let mut config_provider = ConfigProvider::new();
//! config_provider.add_config(AppConfig {
//!     host: "localhost".to_string(),
//!     port: 8080,
//! })?;
//!
//! let retrieved = config_provider
//!     .get_config::<AppConfig>()?
//!     .expect("registered above");
//! assert_eq!(retrieved.host, "localhost");
//! assert_eq!(retrieved.port, 8080);
//! # Ok::<(), wrapp_config::errors::ConfigError>(())
//! ```
//!
//! Wrapp Config consists of the following components:
//!
//! 1. Config - for taking a config as a dependency
//! 2. Provider - for creating a registry of configs, adding and retrieving configs
//! 3. Errors - for config errors

pub mod config;
pub mod errors;
pub mod provider;
