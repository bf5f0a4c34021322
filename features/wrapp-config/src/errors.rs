use wrapp_compose::{errors::ProvideError, types::TypeInfo};

/// Errors when working with the config registry
#[derive(thiserror::Error, Debug, Clone)]
pub enum ConfigError {
    /// The config type is already registered
    #[error("A config of type '{0}' is already registered")]
    AlreadyRegistered(TypeInfo),
    /// The stored config could not be downcast to the requested type
    #[error("Config '{required}' is stored as '{actual}'")]
    Mismatched {
        required: TypeInfo,
        actual: &'static str,
    },
    /// The container refused one of the configs
    #[error(transparent)]
    Install(#[from] ProvideError),
}
