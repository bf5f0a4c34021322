use crate::{
    constructor::{Constructor, FallibleConstructor},
    container::DiContainer,
    dependency_graph::DependencyGraph,
    errors::{BuildError, ProvideError},
    initiator::DiInitiator,
    registry::{Provider, ProviderRegistry},
    types::{Injectable, Instance},
};

//////////////////////////////////////////////////////////////////////
///
/// Composition happens in two parts.
/// 1. The DiBuilder where one registers all constructors and instances
/// 2. `build`, which constructs every registered type once, dependencies first, into a [DiContainer]
///
/// The builder is consumed by `build`. A failed build leaves nothing behind to resolve from,
/// a new builder has to be set up instead.
///
/// The builder is `Send` but not `Sync`, it must not be shared between threads.
#[derive(Default, Debug)]
pub struct DiBuilder {
    /// Registered providers, one per produced type
    pub(crate) registry: ProviderRegistry,
    /// Construction order constraints between all known types
    pub(crate) graph: DependencyGraph,
}

impl DiBuilder {
    pub fn new() -> Self {
        DiBuilder {
            registry: ProviderRegistry::new(),
            graph: DependencyGraph::new(),
        }
    }
}

impl DiBuilder {
    /// Registers a constructor, its parameters are its dependencies
    ///
    /// ```
    /// use std::sync::Arc;
    /// use wrapp_compose::DiBuilder;
    ///
    /// struct Config { dsn: String }
    /// struct Database { config: Arc<Config> }
    ///
    /// let mut builder = DiBuilder::new();
    /// builder
    ///     .provide(|config: Arc<Config>| Database { config })?
    ///     .provide(|| Config { dsn: "postgres://localhost".into() })?;
    ///
    /// let container = builder.build()?;
    /// let database = container.resolve::<Database>()?;
    /// assert_eq!(database.config.dsn, "postgres://localhost");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn provide<Params: 'static, C: Constructor<Params>>(
        &mut self,
        constructor: C,
    ) -> Result<&mut Self, ProvideError> {
        self.register(Provider::new(constructor))
    }

    /// Registers a constructor returning `Result<T, E>`, provides `T`
    ///
    /// An `Err` fails the whole build.
    pub fn try_provide<Params: 'static, C: FallibleConstructor<Params>>(
        &mut self,
        constructor: C,
    ) -> Result<&mut Self, ProvideError> {
        self.register(Provider::fallible(constructor))
    }

    /// Registers an already created value
    pub fn provide_instance<T: Injectable>(&mut self, value: T) -> Result<&mut Self, ProvideError> {
        self.register(Provider::value(value))
    }

    /// Registers an already created, type erased instance under its own type
    pub fn provide_erased(&mut self, instance: Instance) -> Result<&mut Self, ProvideError> {
        self.register(Provider::instance(instance))
    }

    pub fn register(&mut self, provider: Provider) -> Result<&mut Self, ProvideError> {
        self.registry.register(provider, &mut self.graph)?;
        Ok(self)
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Constructs all registered types
    ///
    /// Fails before any constructor runs if the graph has a cycle or a dependency
    /// has no provider.
    pub fn build(self) -> Result<DiContainer, BuildError> {
        DiInitiator::new().initiate(self)
    }
}
