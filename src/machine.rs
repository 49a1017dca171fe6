use crate::{experimental, Result};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

pub const DEFAULT_HOSTNAME: &str = "controller";
pub const DEFAULT_PROVIDER: &str = "virtualbox";
pub const DEFAULT_BOX: &str = "ubuntu/focal64";
pub const DEFAULT_NOF_CPUS: i64 = 2;
pub const DEFAULT_MEM_SIZE: i64 = 4;
pub const DEFAULT_DISK_SIZE: i64 = 10;
pub const DEFAULT_PRIVATE_IP: &str = "192.168.33.11";

/// A port forwarded from the host into the guest.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PortForward {
    pub guest: u16,
    pub host: u16,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub host_ip: Option<String>,
}

/// Desired configuration of one development machine.
///
/// Every key missing from the source mapping takes its default. Values are
/// taken as given, so a negative cpu count is kept rather than rejected.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct MachineSpec {
    hostname: String,
    provider: String,
    #[serde(rename = "box")]
    box_name: String,
    nof_cpus: i64,
    mem_size: i64,
    disk_size: i64,
    private_ips: Vec<String>,
    public_ips: Option<Vec<String>>,
    ssh_forward_x11: bool,
    fwd_port_list: Option<Vec<PortForward>>,
}

impl Default for MachineSpec {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.into(),
            provider: DEFAULT_PROVIDER.into(),
            box_name: DEFAULT_BOX.into(),
            nof_cpus: DEFAULT_NOF_CPUS,
            mem_size: DEFAULT_MEM_SIZE,
            disk_size: DEFAULT_DISK_SIZE,
            private_ips: vec![DEFAULT_PRIVATE_IP.into()],
            public_ips: None,
            ssh_forward_x11: false,
            fwd_port_list: None,
        }
    }
}

impl MachineSpec {
    pub fn from_mapping(mapping: Mapping) -> Result<Self> {
        Ok(serde_yaml::from_value(Value::Mapping(mapping))?)
    }

    /// Builds a machine from one entry of the `machines` list. An empty entry
    /// (`- ` with nothing after it) is the all-defaults machine.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            value => Ok(serde_yaml::from_value(value.clone())?),
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn box_name(&self) -> &str {
        &self.box_name
    }

    pub fn nof_cpus(&self) -> i64 {
        self.nof_cpus
    }

    /// Memory size (GB)
    pub fn mem_size(&self) -> i64 {
        self.mem_size
    }

    /// Disk size (GB)
    pub fn disk_size(&self) -> i64 {
        self.disk_size
    }

    pub fn private_ips(&self) -> &[String] {
        &self.private_ips
    }

    pub fn primary_private_ip(&self) -> Option<&str> {
        self.private_ips.first().map(String::as_str)
    }

    pub fn public_ips(&self) -> Option<&[String]> {
        self.public_ips.as_deref()
    }

    pub fn ssh_forward_x11(&self) -> bool {
        self.ssh_forward_x11
    }

    pub fn fwd_port_list(&self) -> Option<&[PortForward]> {
        self.fwd_port_list.as_deref()
    }

    pub fn is_disks_enabled<S: AsRef<str>>(&self, features: &[S]) -> bool {
        experimental::is_disks_enabled_with(&self.provider, features)
    }
}
