use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub app_addr: String,
    pub app_port: u16,
}

impl Settings {
    pub fn load_configuration() -> Result<Settings, config::ConfigError> {
        // Initialise our configuration reader. Environment variables
        // (APP_ADDR, APP_PORT) take precedence over the file, so each
        // deployment picks its own bind address.
        let settings = config::Config::builder()
            .add_source(config::File::with_name("configuration"))
            .add_source(config::Environment::default())
            .build()?;

        // Try to deserialize the configuration values it read into
        // our `Settings` type.
        settings.try_deserialize()
    }
}
