use std::sync::Arc;

use wrapp_compose::{errors::ProvideError, BuildError, DiBuilder, TypeInfo};
use wrapp_config::{config::Config, errors::ConfigError, provider::ConfigProvider};

struct DbConfig {
    dsn: String,
}

struct CacheConfig {
    ttl_seconds: u64,
}

struct Database {
    dsn: String,
}

struct Cache {
    ttl_seconds: u64,
    database: Arc<Database>,
}

#[test]
fn installed_configs_are_injected() {
    let mut configs = ConfigProvider::new();
    configs
        .add_config(DbConfig {
            dsn: "postgres://localhost".to_string(),
        })
        .unwrap()
        .add_config(CacheConfig { ttl_seconds: 60 })
        .unwrap();

    let mut builder = DiBuilder::new();
    configs.install(&mut builder).unwrap();
    builder
        .provide(|config: Config<CacheConfig>, database: Arc<Database>| Cache {
            ttl_seconds: config.ttl_seconds,
            database,
        })
        .unwrap()
        .provide(|config: Config<DbConfig>| Database {
            dsn: config.dsn.clone(),
        })
        .unwrap();

    let container = builder.build().unwrap();
    let cache = container.resolve::<Cache>().unwrap();

    assert_eq!(cache.ttl_seconds, 60);
    assert_eq!(cache.database.dsn, "postgres://localhost");
    assert!(Arc::ptr_eq(
        &cache.database,
        &container.resolve::<Database>().unwrap()
    ));
}

#[test]
fn config_wrapper_shares_the_installed_instance() {
    let mut configs = ConfigProvider::new();
    configs.add_config(CacheConfig { ttl_seconds: 5 }).unwrap();

    let mut builder = DiBuilder::new();
    configs.install(&mut builder).unwrap();
    builder
        .provide(|config: Config<CacheConfig>| config.into_inner())
        .unwrap();

    let container = builder.build().unwrap();
    let wrapped = container.resolve::<Arc<CacheConfig>>().unwrap();
    let direct = container.resolve::<CacheConfig>().unwrap();

    assert!(Arc::ptr_eq(&*wrapped, &direct));
}

#[test]
fn missing_config_fails_the_build() {
    let mut builder = DiBuilder::new();
    ConfigProvider::new().install(&mut builder).unwrap();
    builder
        .provide(|config: Config<DbConfig>| Database {
            dsn: config.dsn.clone(),
        })
        .unwrap();

    match builder.build().unwrap_err() {
        BuildError::MissingProvider { dependency, .. } => {
            assert_eq!(dependency, TypeInfo::of::<DbConfig>());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_conflicting_with_constructor_is_rejected() {
    let mut builder = DiBuilder::new();
    builder.provide(|| CacheConfig { ttl_seconds: 1 }).unwrap();

    let mut configs = ConfigProvider::new();
    configs.add_config(CacheConfig { ttl_seconds: 2 }).unwrap();

    let error = configs.install(&mut builder).unwrap_err();
    assert!(matches!(
        error,
        ConfigError::Install(ProvideError::DuplicateProvider(_))
    ));
}
