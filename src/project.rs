use crate::{Error, Result};
use path_macro::path;
use std::path::{Path, PathBuf};

const CONFIG_PATH: &str = "machines.yaml";
const SSH_CONFIG_PATH: &str = "ssh_config";
const ROLES_DIR_PATH: &str = "roles";
const GITCONFIG_PATH: &str = ".gitconfig";
pub const DEFAULT_SSH_PUB_KEY_PATH: &str = ".ssh/id_ed25519.pub";

/// Where the generated artifacts live and where user files are read from.
#[derive(Clone, Debug)]
pub struct Project {
    dir: PathBuf,
    home: PathBuf,
    config_path: Option<PathBuf>,
    default_pub_key: PathBuf,
}

impl Project {
    pub fn new<P, H>(dir: P, home: H) -> Self
    where
        P: Into<PathBuf>,
        H: Into<PathBuf>,
    {
        Self {
            dir: dir.into(),
            home: home.into(),
            config_path: None,
            default_pub_key: PathBuf::from(DEFAULT_SSH_PUB_KEY_PATH),
        }
    }

    /// The project rooted at this crate's own directory, so that outputs do
    /// not depend on the caller's working directory.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(env!("CARGO_MANIFEST_DIR"), home_dir()?))
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Default public key, absolute or relative to the home directory.
    pub fn with_default_pub_key<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.default_pub_key = path.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| path![self.dir / CONFIG_PATH])
    }

    pub fn ssh_config_path(&self) -> PathBuf {
        path![self.dir / SSH_CONFIG_PATH]
    }

    pub fn roles_dir_path(&self) -> PathBuf {
        path![self.dir / ROLES_DIR_PATH]
    }

    pub fn gitconfig_path(&self) -> PathBuf {
        path![self.home / GITCONFIG_PATH]
    }

    pub fn default_pub_key_path(&self) -> PathBuf {
        // join keeps an absolute default as-is
        self.home.join(&self.default_pub_key)
    }
}

pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(Error::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_relative_to_project_and_home() {
        let project = Project::new("/srv/dev", "/home/stack");

        assert_eq!(project.config_path(), PathBuf::from("/srv/dev/machines.yaml"));
        assert_eq!(project.ssh_config_path(), PathBuf::from("/srv/dev/ssh_config"));
        assert_eq!(project.roles_dir_path(), PathBuf::from("/srv/dev/roles"));
        assert_eq!(project.gitconfig_path(), PathBuf::from("/home/stack/.gitconfig"));
        assert_eq!(
            project.default_pub_key_path(),
            PathBuf::from("/home/stack/.ssh/id_ed25519.pub")
        );
    }

    #[test]
    fn overrides_take_precedence() {
        let project = Project::new("/srv/dev", "/home/stack")
            .with_config_path("/etc/machines.toml")
            .with_default_pub_key(".ssh/id_rsa.pub");

        assert_eq!(project.config_path(), PathBuf::from("/etc/machines.toml"));
        assert_eq!(
            project.default_pub_key_path(),
            PathBuf::from("/home/stack/.ssh/id_rsa.pub")
        );

        let project = project.with_default_pub_key("/keys/shared.pub");
        assert_eq!(project.default_pub_key_path(), PathBuf::from("/keys/shared.pub"));
    }

    #[test]
    fn bundled_project_lives_in_crate_dir() {
        let project = Project::bundled().unwrap();
        assert_eq!(
            project.ssh_config_path(),
            Path::new(env!("CARGO_MANIFEST_DIR")).join("ssh_config")
        );
    }
}
