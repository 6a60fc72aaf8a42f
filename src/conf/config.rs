use std::collections::HashMap;

use crate::{
    conf::{ServerConfig, StoreConfig},
    core::EntryGateError::{self, ConfigParsingError},
};
use config::{Config as CConfig, ConfigBuilder, Environment, builder::DefaultState};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "ENTRYGATE";

/// Variables the store settings were historically read from, mapped to their
/// config keys. They sit below the config file and `ENTRYGATE_*` overrides.
const HOSTING_ENV: [(&str, &str); 2] = [
    ("SUPABASE_URL", "store.url"),
    ("SUPABASE_KEY", "store.key"),
];

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, EntryGateError> {
        let config = CConfig::builder()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml))
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        return Ok(config);
    }

    /// Loads defaults, hosting variables, the optional file and `ENTRYGATE_*`
    /// variables from the process environment, in increasing precedence.
    pub fn load(path: Option<&str>) -> Result<Config, EntryGateError> {
        Self::load_with_env(path, std::env::vars().collect())
    }

    pub fn load_with_env(
        path: Option<&str>,
        env: HashMap<String, String>,
    ) -> Result<Config, EntryGateError> {
        let mut builder: ConfigBuilder<DefaultState> = CConfig::builder();
        for (var, key) in HOSTING_ENV {
            if let Some(value) = env.get(var) {
                builder = builder.set_default(key, value.as_str())?;
            }
        }
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(env.into_iter().collect())),
        );

        let config = builder.build()?.try_deserialize::<Config>()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn load_correct_toml() {
        let toml = r#"
        [server]
        host = "127.0.0.1"
        port = 3000

        [store]
        url = "https://abc.supabase.co"
        key = "anon-key"
        "#;
        let conf = Config::from_str(toml);
        assert_eq!(
            conf,
            Ok(Config {
                server: ServerConfig {
                    host: String::from("127.0.0.1"),
                    port: 3000
                },
                store: StoreConfig {
                    url: String::from("https://abc.supabase.co"),
                    key: String::from("anon-key"),
                    rest_path: String::from("/rest/v1"),
                }
            })
        );
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let conf = Config::from_str("").unwrap();
        assert_eq!(conf, Config::default());
        assert!(!conf.store.is_configured());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
        [store]
        database = "entries"
        "#;
        assert!(matches!(
            Config::from_str(toml),
            Err(EntryGateError::ConfigParsingError(_))
        ));
    }

    #[test]
    fn hosting_variables_fill_store() {
        let conf = Config::load_with_env(
            None,
            env(&[
                ("SUPABASE_URL", "https://abc.supabase.co"),
                ("SUPABASE_KEY", "anon-key"),
                ("HOME", "/root"),
            ]),
        )
        .unwrap();
        assert_eq!(conf.store.url, "https://abc.supabase.co");
        assert_eq!(conf.store.key, "anon-key");
        assert_eq!(conf.server, ServerConfig::default());
    }

    #[test]
    fn prefixed_variables_override_hosting_variables() {
        let conf = Config::load_with_env(
            None,
            env(&[
                ("SUPABASE_URL", "https://old.supabase.co"),
                ("ENTRYGATE_STORE__URL", "http://127.0.0.1:54321"),
                ("ENTRYGATE_SERVER__PORT", "9000"),
            ]),
        )
        .unwrap();
        assert_eq!(conf.store.url, "http://127.0.0.1:54321");
        assert_eq!(conf.server.port, 9000);
    }

    #[test]
    fn file_sits_between_hosting_and_prefixed_variables() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("entrygate.toml");
        std::fs::write(
            &path,
            r#"
            [server]
            port = 7000

            [store]
            url = "https://file.supabase.co"
            "#,
        )
        .unwrap();

        let conf = Config::load_with_env(
            path.to_str(),
            env(&[
                ("SUPABASE_URL", "https://env.supabase.co"),
                ("SUPABASE_KEY", "anon-key"),
                ("ENTRYGATE_SERVER__PORT", "7001"),
            ]),
        )
        .unwrap();
        assert_eq!(conf.store.url, "https://file.supabase.co");
        assert_eq!(conf.store.key, "anon-key");
        assert_eq!(conf.server.port, 7001);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = Config::load_with_env(Some("/nonexistent/entrygate.toml"), HashMap::new());
        assert!(matches!(result, Err(EntryGateError::ConfigParsingError(_))));
    }
}
