use std::sync::Arc;

use thiserror::Error;

use crate::types::{DynError, TypeInfo};

/// Errors when registering a provider
#[derive(Error, Debug, Clone)]
pub enum ProvideError {
    /// Another provider already produces this type
    #[error("A provider for '{0}' has already been registered")]
    DuplicateProvider(TypeInfo),
    /// The constructor can not be used as a provider
    #[error("Constructor for '{product}' is malformed: {reason}")]
    MalformedConstructor {
        product: TypeInfo,
        reason: &'static str,
    },
}

/// The dependency graph contains a directed cycle
///
/// `chain` starts and ends with the same type.
#[derive(Error, Debug, Clone)]
#[error("A circular dependency exists: {}", display_chain(.chain))]
pub struct CycleError {
    pub chain: Vec<TypeInfo>,
}

fn display_chain(chain: &[TypeInfo]) -> String {
    chain
        .iter()
        .map(|info| info.type_name)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn display_list(types: &[TypeInfo]) -> String {
    types
        .iter()
        .map(|info| info.type_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors while building the container
///
/// Any of these is terminal, the builder has been consumed and nothing was cached.
#[derive(Error, Debug, Clone)]
pub enum BuildError {
    /// There is a cycle in the dependency graph - no constructor was run
    #[error(transparent)]
    CycleDetected(#[from] CycleError),
    /// A type is required but nobody provides it - no constructor was run
    #[error("'{dependency}' is required by [{}] but no provider is registered", display_list(.required_by))]
    MissingProvider {
        dependency: TypeInfo,
        required_by: Vec<TypeInfo>,
    },
    /// A constructor returned an error
    #[error("Constructor for '{product}' failed - error: {error}")]
    ConstructorFailed {
        product: TypeInfo,
        error: Arc<DynError>,
    },
    /// A constructor parameter could not be taken from the already built instances
    #[error("Could not resolve a parameter for '{product}'")]
    Resolve {
        product: TypeInfo,
        #[source]
        source: ResolveError,
    },
}

/// Errors when trying to resolve a certain type
#[derive(Error, Debug, Clone)]
pub enum ResolveError {
    /// No instance of the type has been built
    #[error("No instance of '{0}' has been built")]
    NotResolved(TypeInfo),
    #[error("Failed to downcast, required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        required_type: &'static str,
        actual_type: &'static str,
    },
}

/// Errors while invoking a single constructor
#[derive(Error, Debug)]
pub enum ConstructError {
    /// A parameter could not be resolved
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// The constructor itself returned an error
    #[error("{0}")]
    Failed(DynError),
}
