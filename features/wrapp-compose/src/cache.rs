use std::{collections::HashMap, sync::Arc};

use crate::{
    errors::ResolveError,
    types::{Injectable, Instance, TypeInfo},
};

/// Built instances, keyed by the type they were produced as
#[derive(Default, Clone)]
pub struct InstanceCache {
    instances: HashMap<TypeInfo, Instance>,
}

impl InstanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, info: &TypeInfo) -> Option<&Instance> {
        self.instances.get(info)
    }

    /// Returns the shared instance of `T`
    ///
    /// Never constructs anything, the instance must already be cached.
    pub fn require<T: Injectable>(&self) -> Result<Arc<T>, ResolveError> {
        let info = TypeInfo::of::<T>();
        let instance = self
            .instances
            .get(&info)
            .ok_or(ResolveError::NotResolved(info))?;

        instance
            .downcast()
            .map_err(|actual_type| ResolveError::DowncastFailed {
                required_type: info.type_name,
                actual_type,
            })
    }

    pub fn contains(&self, info: &TypeInfo) -> bool {
        self.instances.contains_key(info)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn types(&self) -> impl Iterator<Item = TypeInfo> + '_ {
        self.instances.keys().copied()
    }

    pub(crate) fn insert(&mut self, instance: Instance) {
        self.instances.insert(instance.info, instance);
    }
}
