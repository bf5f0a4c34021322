use std::{fmt::Debug, sync::Arc};

use crate::{
    cache::InstanceCache,
    dependency_graph::DependencyGraph,
    errors::ResolveError,
    types::{Injectable, TypeInfo},
};

/// Container holding all constructed instances
///
/// Immutable once built. Cloning is cheap and every clone hands out the same instances.
#[derive(Clone)]
pub struct DiContainer(pub Arc<DiContainerInner>);
pub struct DiContainerInner {
    instances: InstanceCache,
    graph: DependencyGraph,
    order: Vec<TypeInfo>,
}
impl Debug for DiContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for info in &self.0.order {
            list.entry(&info.type_name);
        }
        list.finish()
    }
}

impl DiContainer {
    pub(crate) fn new(
        instances: InstanceCache,
        graph: DependencyGraph,
        order: Vec<TypeInfo>,
    ) -> Self {
        Self(Arc::new(DiContainerInner {
            instances,
            graph,
            order,
        }))
    }

    /// Returns the instance built for `T`
    ///
    /// Never constructs anything. Every call returns the same shared instance.
    pub fn resolve<T: Injectable>(&self) -> Result<Arc<T>, ResolveError> {
        self.0.instances.require::<T>()
    }

    pub fn contains<T: Injectable>(&self) -> bool {
        self.0.instances.contains(&TypeInfo::of::<T>())
    }

    pub fn instances(&self) -> &InstanceCache {
        &self.0.instances
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.0.graph
    }

    /// Types in the order their constructors ran
    pub fn construction_order(&self) -> &[TypeInfo] {
        &self.0.order
    }

    pub fn len(&self) -> usize {
        self.0.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.instances.is_empty()
    }
}
