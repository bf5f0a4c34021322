use std::collections::HashMap;

use crate::{
    cache::InstanceCache,
    constructor::{erase, erase_fallible, BoxedConstructor, Constructor, FallibleConstructor},
    dependency_graph::DependencyGraph,
    errors::{ConstructError, ProvideError},
    types::{Injectable, Instance, TypeInfo},
};

/// A registered constructor together with its declared signature
pub struct Provider {
    /// The produced type
    pub info: TypeInfo,
    /// Parameter types, in the order the constructor takes them
    pub parameters: Vec<TypeInfo>,
    constructor: BoxedConstructor,
}

impl Provider {
    pub fn new<Params: 'static, C: Constructor<Params>>(constructor: C) -> Self {
        Provider {
            info: C::product(),
            parameters: C::parameters(),
            constructor: erase(constructor),
        }
    }

    pub fn fallible<Params: 'static, C: FallibleConstructor<Params>>(constructor: C) -> Self {
        Provider {
            info: C::product(),
            parameters: C::parameters(),
            constructor: erase_fallible(constructor),
        }
    }

    /// A dependency free provider handing out an already created instance
    pub fn instance(instance: Instance) -> Self {
        Provider {
            info: instance.info,
            parameters: Vec::new(),
            constructor: Box::new(move |_: &InstanceCache| Ok::<_, ConstructError>(instance)),
        }
    }

    pub fn value<T: Injectable>(value: T) -> Self {
        Self::instance(Instance::new(value))
    }

    /// Checks the provider can produce a usable value
    fn validate(&self) -> Result<(), ProvideError> {
        if self.info.is_unit() {
            return Err(ProvideError::MalformedConstructor {
                product: self.info,
                reason: "constructor must return exactly one value, not `()`",
            });
        }

        Ok(())
    }

    /// Consumes the provider and invokes its constructor
    pub(crate) fn construct(self, cache: &InstanceCache) -> Result<Instance, ConstructError> {
        (self.constructor)(cache)
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("info", &self.info.type_name)
            .field(
                "parameters",
                &self
                    .parameters
                    .iter()
                    .map(|p| p.type_name)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// One provider per produced type
#[derive(Default, Debug)]
pub struct ProviderRegistry {
    providers: HashMap<TypeInfo, Provider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the provider and adds an edge `parameter -> product` per parameter
    ///
    /// Validation happens before the graph is touched, a rejected provider leaves both
    /// the registry and the graph as they were.
    pub fn register(
        &mut self,
        provider: Provider,
        graph: &mut DependencyGraph,
    ) -> Result<(), ProvideError> {
        provider.validate()?;

        if self.providers.contains_key(&provider.info) {
            return Err(ProvideError::DuplicateProvider(provider.info));
        }

        graph.add_node(provider.info);
        for parameter in &provider.parameters {
            graph.add_edge(*parameter, provider.info);
        }

        tracing::debug!(
            "Registered provider for {} with {} parameters",
            provider.info,
            provider.parameters.len()
        );

        self.providers.insert(provider.info, provider);
        Ok(())
    }

    pub fn get(&self, info: &TypeInfo) -> Option<&Provider> {
        self.providers.get(info)
    }

    pub fn contains(&self, info: &TypeInfo) -> bool {
        self.providers.contains_key(info)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Removes the provider so its constructor can be invoked
    pub(crate) fn take(&mut self, info: &TypeInfo) -> Option<Provider> {
        self.providers.remove(info)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    struct Config;
    struct Logger;
    struct Database;

    #[test]
    fn register_adds_one_edge_per_parameter() {
        let mut registry = ProviderRegistry::new();
        let mut graph = DependencyGraph::new();

        registry
            .register(
                Provider::new(|_: Arc<Config>, _: Arc<Logger>| Database),
                &mut graph,
            )
            .unwrap();

        assert!(registry.contains(&TypeInfo::of::<Database>()));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.edges_from(&TypeInfo::of::<Config>()).collect::<Vec<_>>(),
            vec![TypeInfo::of::<Database>()]
        );
    }

    #[test]
    fn root_provider_is_a_graph_node() {
        let mut registry = ProviderRegistry::new();
        let mut graph = DependencyGraph::new();

        registry.register(Provider::new(|| Config), &mut graph).unwrap();

        assert!(graph.contains(&TypeInfo::of::<Config>()));
        assert_eq!(graph.edge_count(), 0);
        assert!(registry.get(&TypeInfo::of::<Config>()).unwrap().parameters.is_empty());
    }

    #[test]
    fn duplicate_provider_keeps_first_and_graph() {
        let mut registry = ProviderRegistry::new();
        let mut graph = DependencyGraph::new();

        registry.register(Provider::new(|| Logger), &mut graph).unwrap();
        let error = registry
            .register(Provider::new(|_: Arc<Config>| Logger), &mut graph)
            .unwrap_err();

        assert!(matches!(error, ProvideError::DuplicateProvider(info) if info == TypeInfo::of::<Logger>()));
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&TypeInfo::of::<Logger>()).unwrap().parameters.is_empty());
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn unit_product_is_malformed() {
        let mut registry = ProviderRegistry::new();
        let mut graph = DependencyGraph::new();

        let error = registry
            .register(Provider::new(|_: Arc<Config>| {}), &mut graph)
            .unwrap_err();

        assert!(matches!(error, ProvideError::MalformedConstructor { .. }));
        assert!(registry.is_empty());
        assert!(graph.is_empty());
    }

    #[test]
    fn instance_provider_returns_given_instance() {
        let instance = Instance::new(String::from("prebuilt"));
        let provider = Provider::instance(instance.clone());

        assert_eq!(provider.info, TypeInfo::of::<String>());
        assert!(provider.parameters.is_empty());

        let built = provider.construct(&InstanceCache::new()).unwrap();
        assert!(built.ptr_eq(&instance));
    }
}
