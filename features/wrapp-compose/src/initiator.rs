use std::sync::Arc;

use crate::{
    builder::DiBuilder,
    cache::InstanceCache,
    container::DiContainer,
    dependency_graph::DependencyGraph,
    errors::{BuildError, ConstructError, CycleError},
    registry::ProviderRegistry,
    types::TypeInfo,
    walker::GraphWalker,
};

/// Initiates the DiContainer
///
/// Runs on the caller's thread, constructors are invoked one after another.
pub(crate) struct DiInitiator {
    /// All produced instances
    instances: InstanceCache,
    /// Types in the order they were constructed
    constructed: Vec<TypeInfo>,
}

impl DiInitiator {
    pub(crate) fn new() -> DiInitiator {
        DiInitiator {
            instances: InstanceCache::new(),
            constructed: Vec::new(),
        }
    }

    pub fn initiate(mut self, blueprint: DiBuilder) -> Result<DiContainer, BuildError> {
        let DiBuilder {
            mut registry,
            graph,
        } = blueprint;

        tracing::debug!(
            "Building container with {} providers and {} types",
            registry.len(),
            graph.node_count()
        );

        // Check the graph before anything is constructed
        let order = construction_order(&graph)?;
        check_providers(&registry, &graph, &order)?;

        for info in order {
            self.construct(&mut registry, &graph, info)?;
        }

        tracing::debug!("All {} types constructed", self.constructed.len());

        Ok(DiContainer::new(self.instances, graph, self.constructed))
    }

    fn construct(
        &mut self,
        registry: &mut ProviderRegistry,
        graph: &DependencyGraph,
        info: TypeInfo,
    ) -> Result<(), BuildError> {
        let Some(provider) = registry.take(&info) else {
            return Err(missing_provider(graph, info));
        };

        let instance = provider
            .construct(&self.instances)
            .map_err(|error| match error {
                ConstructError::Resolve(source) => BuildError::Resolve {
                    product: info,
                    source,
                },
                ConstructError::Failed(error) => {
                    tracing::error!("Constructor for {} failed: {}", info, error);
                    BuildError::ConstructorFailed {
                        product: info,
                        error: Arc::new(error),
                    }
                }
            })?;

        tracing::debug!("Constructed instance of {}", instance.info);
        self.instances.insert(instance);
        self.constructed.push(info);
        Ok(())
    }
}

/// Dependencies first
fn construction_order(graph: &DependencyGraph) -> Result<Vec<TypeInfo>, BuildError> {
    let walker = GraphWalker::new(graph);
    if let Some(chain) = walker.find_cycle() {
        let error = CycleError { chain };
        tracing::error!("{}", error);
        return Err(error.into());
    }

    Ok(walker.topological_order()?)
}

/// Every node of the graph needs a provider, types only known as a dependency are an error
fn check_providers(
    registry: &ProviderRegistry,
    graph: &DependencyGraph,
    order: &[TypeInfo],
) -> Result<(), BuildError> {
    match order.iter().find(|info| !registry.contains(info)) {
        Some(info) => {
            let error = missing_provider(graph, *info);
            tracing::error!("{}", error);
            Err(error)
        }
        None => Ok(()),
    }
}

fn missing_provider(graph: &DependencyGraph, dependency: TypeInfo) -> BuildError {
    BuildError::MissingProvider {
        dependency,
        required_by: graph.edges_from(&dependency).collect(),
    }
}
