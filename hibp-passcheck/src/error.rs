use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open password file '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read password file: {0}")]
    Read(#[source] std::io::Error),

    #[error("leak check failed for '{password}': {source}")]
    Lookup {
        password: String,
        #[source]
        source: hibp_range_client::Error,
    },

    #[error("failed to write report: {0}")]
    Write(#[source] std::io::Error),
}
