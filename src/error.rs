use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    IO(#[from] io::Error),

    #[error("cannot determine home directory")]
    NoHomeDirectory,

    #[error("machine has no private ip: {hostname}")]
    MissingPrivateIp { hostname: String },

    #[error("invalid machine: {name}")]
    InvalidMachine { name: String },

    #[error("unsupported config format: {path:?}")]
    UnsupportedConfigFormat { path: PathBuf },

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
