// Crate error type. Every variant states *where* things went wrong.
// The drawing core itself never fails; only the host window and the
// startup configuration can.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),
    /// Pushing the frame buffer to the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),
    /// The config file named on the command line could not be read
    #[error("Config read error ({}): {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid YAML for `Config`
    #[error("Config parse error ({}): {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    /// A config value is out of its allowed range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// A color string was not `#RRGGBB`
    #[error("Invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),
}
