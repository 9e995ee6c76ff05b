pub mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq, Eq)]
    pub struct Config {
        #[serde(default = "default_database_url")]
        pub database_url: String,
        #[serde(default = "default_host")]
        pub host: String,
        #[serde(default = "default_port")]
        pub port: u16,
    }

    impl Config {
        /// Loads configuration from environment variables.
        pub fn from_env() -> anyhow::Result<Self> {
            Self::load(config::Environment::default())
        }

        /// Loads configuration from the given environment source.
        pub fn load(environment: config::Environment) -> anyhow::Result<Self> {
            let settings = config::Config::builder()
                .add_source(environment)
                .build()?;

            let config: Config = settings.try_deserialize()?;
            Ok(config)
        }
    }

    fn default_database_url() -> String {
        "sqlite://data/todos.db?mode=rwc".to_string()
    }

    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        5001
    }

}
pub mod entities;
pub mod todo;
pub mod web;
