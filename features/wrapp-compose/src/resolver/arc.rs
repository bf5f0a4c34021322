use std::sync::Arc;

use crate::{
    cache::InstanceCache,
    errors::ResolveError,
    resolver::Resolver,
    types::{Injectable, TypeInfo},
};

/// `Arc<T>` resolves to the one shared instance of `T`
impl<T: Injectable> Resolver for Arc<T> {
    fn dependency() -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn resolve(cache: &InstanceCache) -> Result<Self, ResolveError> {
        cache.require::<T>()
    }
}
