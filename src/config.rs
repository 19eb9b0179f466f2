//! Application configuration loaded from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Root configuration document.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server binding.
    pub server: ServerSettings,
    /// Logging configuration.
    pub logger: LoggerSettings,
    /// Graph adapter selection per ontology domain.
    pub ontology: OntologySettings,
}

impl Config {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// HTTP server binding settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5150,
        }
    }
}

/// Logging settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// Default tracing filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Adapter settings for the three graph domains.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OntologySettings {
    /// Functional-annotation graph.
    pub functions: GraphSettings,
    /// Reaction graph.
    pub reactions: GraphSettings,
    /// Chemical-label store.
    pub chemicals: GraphSettings,
}

/// Backend selection and seed source for one graph domain.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// Storage backend for the graph.
    pub backend: GraphBackend,
    /// Optional seed file loaded into the backend at startup.
    pub seed: Option<PathBuf>,
}

/// Supported graph backends.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GraphBackend {
    /// Deterministic in-memory graph, optionally seeded from a JSON file.
    #[default]
    InMemory,
}

#[cfg(test)]
mod tests {
    use super::{Config, GraphBackend};
    use std::path::PathBuf;

    #[test]
    fn every_section_has_defaults() {
        let config: Config = serde_yaml::from_str("{}").expect("empty document");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5150);
        assert_eq!(config.logger.level, "info");
        assert_eq!(config.ontology.functions.backend, GraphBackend::InMemory);
        assert!(config.ontology.functions.seed.is_none());
    }

    #[test]
    fn seeded_backends_parse() {
        let config: Config = serde_yaml::from_str(
            r"
server:
  host: 0.0.0.0
  port: 8080
logger:
  level: debug
ontology:
  functions:
    backend: in_memory
    seed: data/demo/go.json
  reactions:
    seed: data/demo/rhea.json
",
        )
        .expect("document");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logger.level, "debug");
        assert_eq!(
            config.ontology.functions.seed,
            Some(PathBuf::from("data/demo/go.json"))
        );
        assert_eq!(
            config.ontology.reactions.seed,
            Some(PathBuf::from("data/demo/rhea.json"))
        );
        assert!(config.ontology.chemicals.seed.is_none());
    }

    #[test]
    fn unknown_backends_are_rejected() {
        let parsed: Result<Config, _> = serde_yaml::from_str(
            r"
ontology:
  functions:
    backend: sqlite
",
        );
        assert!(parsed.is_err());
    }
}
