use std::{ops::Deref, sync::Arc};

use wrapp_compose::{
    cache::InstanceCache,
    errors::ResolveError,
    resolver::Resolver,
    types::{Injectable, TypeInfo},
};

/// A wrapper type to allow for config injections
///
/// This provides a simple way to take configs registered in a [crate::provider::ConfigProvider]
/// as constructor parameters. `Config<T>` depends on the installed `T` and derefs to it.
///
/// # Example
/// ```rust
/// use wrapp_compose::DiBuilder;
/// use wrapp_config::{config::Config, provider::ConfigProvider};
///
/// pub struct MyModuleConfig {
///     enabled: bool,
/// }
///
/// pub struct MyModule {
///     enabled: bool,
/// }
///
/// let mut configs = ConfigProvider::new();
/// configs.add_config(MyModuleConfig { enabled: true })?;
///
/// let mut builder = DiBuilder::new();
/// configs.install(&mut builder)?;
/// builder.provide(|config: Config<MyModuleConfig>| MyModule {
///     enabled: config.enabled,
/// })?;
///
/// let container = builder.build()?;
/// assert!(container.resolve::<MyModule>()?.enabled);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Config<T> {
    inner: Arc<T>,
}
impl<T> Deref for Config<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl<T> Clone for Config<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
impl<T> Config<T> {
    pub fn inner(&self) -> Arc<T> {
        self.inner.clone()
    }

    pub fn into_inner(self) -> Arc<T> {
        self.inner
    }
}

impl<T: Injectable> Resolver for Config<T> {
    fn dependency() -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn resolve(cache: &InstanceCache) -> Result<Self, ResolveError> {
        Ok(Config {
            inner: cache.require::<T>()?,
        })
    }
}
