//! SSH public key lookup and `ssh_config` generation.

use crate::{Config, Error, GlobalConfig, MachineCollection, Project, Result};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const HOME_TOKEN: &str = "$HOME";
const SSH_USER: &str = "stack";

/// Outcome of reading the user's public key.
#[derive(Debug)]
pub enum PubKey {
    Available(String),
    Unavailable { path: PathBuf, source: io::Error },
}

impl PubKey {
    /// The key text, or an empty string when it could not be read.
    pub fn as_str(&self) -> &str {
        match self {
            PubKey::Available(key) => key,
            PubKey::Unavailable { .. } => "",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, PubKey::Available(_))
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            PubKey::Available(key) => Some(key),
            PubKey::Unavailable { .. } => None,
        }
    }
}

/// `global.ssh_pub_key` with `$HOME` expanded, or the project's default key.
pub fn pub_key_path(global: &GlobalConfig, project: &Project) -> PathBuf {
    match &global.ssh_pub_key {
        Some(key) => PathBuf::from(key.replace(HOME_TOKEN, &project.home().to_string_lossy())),
        None => project.default_pub_key_path(),
    }
}

pub fn read_pub_key<P: AsRef<Path>>(path: P) -> PubKey {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), "read ssh public key");
            PubKey::Available(chomp(&text).into())
        }
        Err(source) => {
            warn!(path = %path.display(), error = %source, "ssh public key unavailable");
            PubKey::Unavailable {
                path: path.into(),
                source,
            }
        }
    }
}

pub fn resolve_pub_key(global: &GlobalConfig, project: &Project) -> PubKey {
    read_pub_key(pub_key_path(global, project))
}

fn chomp(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .or_else(|| text.strip_suffix('\r'))
        .unwrap_or(text)
}

/// Renders one `Host` block per machine, in order, followed by the
/// catch-all block that disables host key checking.
pub fn render_ssh_config(machines: &MachineCollection) -> Result<String> {
    let mut out = String::new();

    for machine in machines {
        let ip = machine
            .primary_private_ip()
            .ok_or_else(|| Error::MissingPrivateIp {
                hostname: machine.hostname().into(),
            })?;
        out.push_str(&format!(
            "Host {}\n  HostName {ip}\n  User {SSH_USER}\n",
            machine.hostname()
        ));
    }

    out.push_str("Host *\n  StrictHostKeyChecking no\n  UserKnownHostsFile=/dev/null\n");
    Ok(out)
}

/// Writes the rendered config to `path`. Returns `false` without touching
/// the file when the document has no `machines` key.
pub fn write_ssh_config<P: AsRef<Path>>(config: &Config, path: P) -> Result<bool> {
    let path = path.as_ref();
    let Some(machines) = config.machines() else {
        info!("no machines defined, leaving ssh_config untouched");
        return Ok(false);
    };

    fs::write(path, render_ssh_config(&machines?)?)?;
    info!(path = %path.display(), "wrote ssh_config");
    Ok(true)
}
