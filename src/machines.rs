use crate::{MachineSpec, Result};
use serde_yaml::Value;
use std::slice::Iter;

/// Machines in the order they were declared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MachineCollection {
    machines: Vec<MachineSpec>,
}

impl MachineCollection {
    pub fn new(machines: Vec<MachineSpec>) -> Self {
        Self { machines }
    }

    /// Builds one `MachineSpec` per entry. Position `i` of the collection is
    /// entry `i` of the input; the first malformed entry aborts the build.
    pub fn from_values(entries: &[Value]) -> Result<Self> {
        entries
            .iter()
            .map(MachineSpec::from_value)
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// First machine with the given hostname.
    pub fn get(&self, hostname: &str) -> Option<&MachineSpec> {
        self.machines
            .iter()
            .find(|machine| machine.hostname() == hostname)
    }

    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.machines.iter().map(MachineSpec::hostname)
    }

    pub fn iter(&self) -> Iter<'_, MachineSpec> {
        self.machines.iter()
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}

impl std::ops::Index<usize> for MachineCollection {
    type Output = MachineSpec;

    fn index(&self, index: usize) -> &Self::Output {
        &self.machines[index]
    }
}

impl<'a> IntoIterator for &'a MachineCollection {
    type Item = &'a MachineSpec;
    type IntoIter = Iter<'a, MachineSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
