use crate::{cache::InstanceCache, errors::ResolveError, types::TypeInfo};

pub mod arc;

/// A value a constructor can take as parameter
///
/// The declared [Resolver::dependency] becomes an edge in the dependency graph, so by the
/// time the constructor runs the instance is guaranteed to be cached.
pub trait Resolver: Sized {
    /// The type which has to be built before this parameter can be resolved
    fn dependency() -> TypeInfo;

    /// Takes the parameter value from the already built instances
    fn resolve(cache: &InstanceCache) -> Result<Self, ResolveError>;
}
