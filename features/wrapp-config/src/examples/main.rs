use std::sync::Arc;

use wrapp_compose::DiBuilder;
use wrapp_config::{config::Config, provider::ConfigProvider};

struct AppConfig {
    host: String,
    port: u16,
    app_name: String,
}

struct Server {
    address: String,
    name: String,
}

struct Greeter {
    server: Arc<Server>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config_provider = ConfigProvider::new();
    config_provider.add_config(AppConfig {
        host: "localhost".to_string(),
        port: 8080_u16,
        app_name: "My Awesome App".to_string(),
    })?;

    let mut app = DiBuilder::new();
    config_provider.install(&mut app)?;
    app.provide(|server: Arc<Server>| Greeter { server })?
        .provide(|config: Config<AppConfig>| Server {
            address: format!("{}:{}", config.host, config.port),
            name: config.app_name.clone(),
        })?;

    let app = app.build()?;
    let greeter = app.resolve::<Greeter>()?;
    println!(
        "{} listening on {}",
        greeter.server.name, greeter.server.address
    );

    Ok(())
}
