use crate::{Error, MachineCollection, Result};
use serde::Deserialize;
use serde_yaml::Value;
use std::{fs, path::Path};
use tracing::debug;

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobalConfig {
    #[serde(default)]
    pub ssh_pub_key: Option<String>,
}

/// The machines document: a `global` section and a `machines` list.
///
/// Machine entries are kept as raw values until `machines()` is called so
/// that a document without a `machines` key can be told apart from one with
/// an empty list.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    machines: Option<Vec<Value>>,
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty or comment-only document is null
        match serde_yaml::from_str::<Value>(text)? {
            Value::Null => Ok(Self::default()),
            value => Ok(serde_yaml::from_value(value)?),
        }
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads the document at `path`, picking the format from its extension.
    /// A missing file is an empty document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let parse: fn(&str) -> Result<Self> =
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml" | "yml") => Self::from_yaml,
                Some("toml") => Self::from_toml,
                _ => {
                    return Err(Error::UnsupportedConfigFormat {
                        path: path.into(),
                    })
                }
            };

        if fs::metadata(path).is_err() {
            debug!(path = %path.display(), "no machines document, using an empty one");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading machines document");
        parse(&fs::read_to_string(path)?)
    }

    /// `None` when the document has no `machines` key.
    pub fn machines(&self) -> Option<Result<MachineCollection>> {
        self.machines
            .as_deref()
            .map(MachineCollection::from_values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_macro::path;
    use tempfile::TempDir;

    const YAML: &str = r#"
global:
  ssh_pub_key: $HOME/.ssh/custom.pub
machines:
  - hostname: controller
    nof_cpus: 4
  - hostname: compute1
    private_ips: ["192.168.33.12"]
"#;

    const TOML: &str = r#"
[global]
ssh_pub_key = "$HOME/.ssh/custom.pub"

[[machines]]
hostname = "controller"
nof_cpus = 4

[[machines]]
hostname = "compute1"
private_ips = ["192.168.33.12"]
"#;

    #[test]
    fn parses_yaml_document() {
        let config = Config::from_yaml(YAML).unwrap();
        assert_eq!(
            config.global.ssh_pub_key.as_deref(),
            Some("$HOME/.ssh/custom.pub")
        );

        let machines = config.machines().unwrap().unwrap();
        assert_eq!(machines.len(), 2);
        assert_eq!(machines[0].nof_cpus(), 4);
        assert_eq!(machines[1].primary_private_ip(), Some("192.168.33.12"));
    }

    #[test]
    fn toml_document_is_equivalent() {
        let yaml = Config::from_yaml(YAML).unwrap();
        let toml = Config::from_toml(TOML).unwrap();

        assert_eq!(yaml.global, toml.global);
        assert_eq!(
            yaml.machines().unwrap().unwrap(),
            toml.machines().unwrap().unwrap()
        );
    }

    #[test]
    fn missing_machines_key_is_none() {
        let config = Config::from_yaml("global: {}\n").unwrap();
        assert!(config.machines().is_none());
        assert_eq!(config.global.ssh_pub_key, None);
    }

    #[test]
    fn empty_machines_list_is_some() {
        let config = Config::from_yaml("machines: []\n").unwrap();
        assert!(config.machines().unwrap().unwrap().is_empty());
    }

    #[test]
    fn empty_document_is_default() {
        let config = Config::from_yaml("").unwrap();
        assert!(config.machines().is_none());
        assert_eq!(config.global, GlobalConfig::default());

        let config = Config::from_yaml("# nothing here yet\n").unwrap();
        assert!(config.machines().is_none());
    }

    #[test]
    fn load_missing_file_is_empty_document() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(path![dir.path() / "machines.yaml"]).unwrap();
        assert!(config.machines().is_none());
    }

    #[test]
    fn load_picks_format_by_extension() {
        let dir = TempDir::new().unwrap();
        let yaml = path![dir.path() / "machines.yml"];
        let toml = path![dir.path() / "machines.toml"];
        fs::write(&yaml, YAML).unwrap();
        fs::write(&toml, TOML).unwrap();

        assert_eq!(Config::load(&yaml).unwrap().machines().unwrap().unwrap().len(), 2);
        assert_eq!(Config::load(&toml).unwrap().machines().unwrap().unwrap().len(), 2);
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let json = path![dir.path() / "machines.json"];
        fs::write(&json, "{}").unwrap();

        assert!(matches!(
            Config::load(&json),
            Err(Error::UnsupportedConfigFormat { .. })
        ));
    }
}
