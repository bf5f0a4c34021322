use std::{collections::HashMap, sync::Arc};

use wrapp_compose::{
    builder::DiBuilder,
    types::{Injectable, Instance, TypeInfo},
};

use crate::errors::ConfigError;

/// A provider to register all configs.
///
/// Configs can be registered and retrieved based on type. Once complete, the registry
/// is installed into a [DiBuilder] where every config becomes a provider without
/// dependencies.
#[derive(Default, Debug)]
pub struct ConfigProvider {
    configs: HashMap<TypeInfo, Instance>,
    /// Registration order, so installation is deterministic
    order: Vec<TypeInfo>,
}

impl ConfigProvider {
    /// Initializes an empty Config Provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve a config with specified type.
    ///
    /// Returns `Ok(None)` if no config of that type was registered
    pub fn get_config<T: Injectable>(&self) -> Result<Option<Arc<T>>, ConfigError> {
        let info = TypeInfo::of::<T>();

        self.configs
            .get(&info)
            .map(|entry| entry.downcast::<T>())
            .transpose()
            .map_err(|actual| ConfigError::Mismatched {
                required: info,
                actual,
            })
    }

    /// Add a config to the registry.
    ///
    /// If the config type is already registered, it will return a
    /// [`ConfigError`] runtime error
    pub fn add_config<T: Injectable>(&mut self, config: T) -> Result<&mut Self, ConfigError> {
        let info = TypeInfo::of::<T>();

        if self.configs.contains_key(&info) {
            return Err(ConfigError::AlreadyRegistered(info));
        }

        self.configs.insert(info, Instance::new(config));
        self.order.push(info);
        Ok(self)
    }

    /// Can optionally add a config to the registry.
    ///
    /// If the config provided is `Some(T)`, it will be the same as calling [`ConfigProvider::add_config`]
    /// If the config provided is `None`, then the function just returns `Ok(self)` for chaining
    pub fn maybe_add_config<T: Injectable>(
        &mut self,
        config: Option<T>,
    ) -> Result<&mut Self, ConfigError> {
        match config {
            Some(c) => self.add_config(c),
            None => Ok(self),
        }
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Registers every config in the builder, in the order they were added
    ///
    /// Stops at the first config the builder rejects, e.g. because a constructor for the
    /// same type was already provided.
    pub fn install(mut self, builder: &mut DiBuilder) -> Result<(), ConfigError> {
        for info in self.order.drain(..) {
            let Some(instance) = self.configs.remove(&info) else {
                continue;
            };
            builder.provide_erased(instance)?;
            tracing::debug!("Installed config {}", info);
        }

        Ok(())
    }
}
