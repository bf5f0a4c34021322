//! Wrapp Compose builds an application's object graph from plain constructor functions.
//!
//! Every constructor produces one type and declares its dependencies through its
//! parameters. From those declarations a dependency graph is derived, checked for cycles
//! and missing providers, and walked into a construction order. `build` then invokes each
//! constructor exactly once, dependencies first, and caches the results so they can be
//! resolved by type.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use wrapp_compose::DiBuilder;
//!
//! struct Config;
//! struct Logger { config: Arc<Config> }
//! struct Service { logger: Arc<Logger> }
//!
//! let mut builder = DiBuilder::new();
//! builder
//!     .provide(|logger: Arc<Logger>| Service { logger })?
//!     .provide(|config: Arc<Config>| Logger { config })?
//!     .provide(|| Config)?;
//!
//! let container = builder.build()?;
//! let service = container.resolve::<Service>()?;
//! assert!(Arc::ptr_eq(&service.logger, &container.resolve::<Logger>()?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Wrapp Compose consists of the following components:
//!
//! 1. DependencyGraph - types as nodes, an edge for every "must be built before"
//! 2. GraphWalker - depth first traversal, cycle detection and construction order
//! 3. ProviderRegistry - one constructor per produced type
//! 4. DiBuilder / DiContainer - registration, the build pass and resolution by type
//!
//! Everything runs synchronously on the caller's thread.

pub mod builder;
pub mod cache;
pub mod constructor;
pub mod container;
pub mod dependency_graph;
pub mod errors;
mod initiator;
pub mod registry;
pub mod resolver;
pub mod types;
pub mod walker;

pub use builder::DiBuilder;
pub use cache::InstanceCache;
pub use constructor::{Constructor, FallibleConstructor};
pub use container::DiContainer;
pub use dependency_graph::DependencyGraph;
pub use errors::{BuildError, CycleError, ProvideError, ResolveError};
pub use registry::{Provider, ProviderRegistry};
pub use resolver::Resolver;
pub use types::{DynError, Injectable, Instance, TypeInfo};
pub use walker::GraphWalker;
