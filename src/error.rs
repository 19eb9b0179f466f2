use std::path::PathBuf;

use crate::ontology::service::AdapterError;

/// Errors reaching the process boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a configuration file failed.
    #[error("failed to read configuration `{path}`: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A configuration file did not parse.
    #[error("malformed configuration `{path}`: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    /// Constructing the ontology adapters failed.
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    /// Binding or serving the HTTP listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
