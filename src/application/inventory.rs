//! Inventory descriptions: building a `Network` from TOML or from the built-in sample.
//!
//! Descriptions are applied through the domain mutators, so file order becomes
//! insertion order and storage kinds are derived by `StorageDevice::new`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{HardwareUnit, Machine, Network, Processor, Ram, StorageDevice};
use crate::util::path::expand_env_vars;

/// Top level of an inventory file.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InventoryFile {
    pub name: String,
    #[serde(default)]
    pub machines: Vec<MachineEntry>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MachineEntry {
    pub hostname: String,
    #[serde(default)]
    pub ips: Vec<String>,
    #[serde(default)]
    pub hardware: Vec<HardwareEntry>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HardwareEntry {
    Processor {
        cores: u32,
        frequency: u32,
    },
    Ram {
        capacity: u64,
    },
    Storage {
        capacity: u64,
        kind: String,
        #[serde(default)]
        partitions: Vec<PartitionEntry>,
    },
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartitionEntry {
    pub size: u64,
    pub purpose: String,
}

impl InventoryFile {
    pub fn into_network(self) -> Network {
        let mut network = Network::new(self.name);
        for entry in self.machines {
            network.add_machine(entry.into_machine());
        }
        network
    }
}

impl MachineEntry {
    fn into_machine(self) -> Machine {
        let mut machine = Machine::new(self.hostname);
        for ip in self.ips {
            machine.add_ip(ip);
        }
        for unit in self.hardware {
            machine.add_hardware(unit.into_unit());
        }
        machine
    }
}

impl HardwareEntry {
    fn into_unit(self) -> HardwareUnit {
        match self {
            HardwareEntry::Processor { cores, frequency } => {
                Processor::new(cores, frequency).into()
            }
            HardwareEntry::Ram { capacity } => Ram::new(capacity).into(),
            HardwareEntry::Storage {
                capacity,
                kind,
                partitions,
            } => {
                let mut storage = StorageDevice::new(capacity, &kind);
                for part in partitions {
                    storage.add_part(part.size, part.purpose);
                }
                storage.into()
            }
        }
    }
}

/// Parse inventory TOML. `path` is only used for error messages.
pub fn parse_inventory(content: &str, path: &Path) -> ApplicationResult<Network> {
    let file: InventoryFile = toml::from_str(content).map_err(|e| ApplicationError::Inventory {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    Ok(file.into_network())
}

/// Read and parse an inventory file. `~` and `$VAR` in the path are expanded.
#[instrument(level = "debug")]
pub fn load_inventory(path: &Path) -> ApplicationResult<Network> {
    let expanded = expand_env_vars(&path.to_string_lossy());
    let path = Path::new(&expanded);
    let content = fs::read_to_string(path).with_path_context("read inventory", path)?;
    let network = parse_inventory(&content, path)?;
    debug!(
        "Loaded network {:?} with {} machines",
        network.name,
        network.machines.len()
    );
    Ok(network)
}

/// Build the hierarchy from `inventory`, or the sample network when none is given.
#[instrument(level = "debug")]
pub fn build_network(inventory: Option<&Path>) -> ApplicationResult<Network> {
    match inventory {
        Some(path) => load_inventory(path),
        None => {
            debug!("No inventory given, using sample network");
            Ok(sample_network())
        }
    }
}

/// Two-machine demo network.
pub fn sample_network() -> Network {
    let mut network = Network::new("MISIS network");

    let mut m1 = Machine::new("server1.misis.ru");
    m1.add_ip("192.168.1.1");
    m1.add_hardware(Processor::new(4, 2500));
    m1.add_hardware(Ram::new(16000));
    network.add_machine(m1);

    let mut m2 = Machine::new("server2.misis.ru");
    m2.add_ip("10.0.0.1");
    m2.add_hardware(Processor::new(8, 3200));
    let mut storage = StorageDevice::new(2000, "hdd");
    storage.add_part(500, "system");
    storage.add_part(1500, "data");
    m2.add_hardware(storage);
    network.add_machine(m2);

    network
}
