use std::fmt;
use tabled::{settings::Style, Table, Tabled};
use vmspec::{MachineCollection, MachineSpec};

fn join(values: Option<&[String]>) -> String {
    values.map(|v| v.join(",")).unwrap_or_else(|| "-".into())
}

#[derive(Tabled)]
struct MachineInfo {
    #[tabled(rename = "HOSTNAME")]
    hostname: String,
    #[tabled(rename = "PROVIDER")]
    provider: String,
    #[tabled(rename = "BOX")]
    box_name: String,
    #[tabled(rename = "CPUS")]
    cpus: i64,
    #[tabled(rename = "MEM (GB)")]
    mem: i64,
    #[tabled(rename = "DISK (GB)")]
    disk: i64,
    #[tabled(rename = "PRIVATE IPS")]
    private_ips: String,
    #[tabled(rename = "PUBLIC IPS")]
    public_ips: String,
    #[tabled(rename = "X11")]
    x11: bool,
    #[tabled(rename = "FORWARDS")]
    forwards: usize,
}

impl From<&MachineSpec> for MachineInfo {
    fn from(machine: &MachineSpec) -> Self {
        Self {
            hostname: machine.hostname().into(),
            provider: machine.provider().into(),
            box_name: machine.box_name().into(),
            cpus: machine.nof_cpus(),
            mem: machine.mem_size(),
            disk: machine.disk_size(),
            private_ips: join(Some(machine.private_ips())),
            public_ips: join(machine.public_ips()),
            x11: machine.ssh_forward_x11(),
            forwards: machine.fwd_port_list().map_or(0, <[_]>::len),
        }
    }
}

pub struct MachineTable {
    table: Table,
}

impl MachineTable {
    pub fn new(machines: &MachineCollection) -> Self {
        Self::filtered(machines, &[])
    }

    pub fn filtered(machines: &MachineCollection, filter: &[&str]) -> Self {
        let mut table = Table::new(
            machines
                .iter()
                .filter(|machine| filter.is_empty() || filter.contains(&machine.hostname()))
                .map(MachineInfo::from)
                .collect::<Vec<_>>(),
        );
        table.with(Style::blank());
        Self { table }
    }
}

impl fmt::Display for MachineTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table)
    }
}

#[derive(Tabled)]
struct FeatureInfo {
    #[tabled(rename = "PROVIDER")]
    provider: String,
    #[tabled(rename = "DISKS")]
    disks: bool,
}

pub struct FeatureTable {
    table: Table,
}

impl FeatureTable {
    pub fn new<S: AsRef<str>>(providers: &[String], features: &[S]) -> Self {
        let mut table = Table::new(
            providers
                .iter()
                .map(|provider| FeatureInfo {
                    provider: provider.clone(),
                    disks: vmspec::experimental::is_disks_enabled_with(provider, features),
                })
                .collect::<Vec<_>>(),
        );
        table.with(Style::blank());
        Self { table }
    }
}

impl fmt::Display for FeatureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table)
    }
}
