//! Domain entities: the inventory hierarchy
//!
//! Ownership follows the hierarchy exactly: a `Network` owns its machines, a
//! `Machine` owns its addresses and hardware, a `StorageDevice` owns its
//! partitions. Child sequences keep insertion order.

use std::fmt;

/// Root of the hierarchy.
#[derive(Debug, PartialEq, Eq)]
pub struct Network {
    pub name: String,
    pub machines: Vec<Machine>,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            machines: Vec::new(),
        }
    }

    pub fn add_machine(&mut self, machine: Machine) {
        self.machines.push(machine);
    }

    /// First machine whose hostname equals `hostname` exactly.
    pub fn find_machine(&self, hostname: &str) -> Option<&Machine> {
        self.machines.iter().find(|m| m.hostname == hostname)
    }

    pub fn find_machine_mut(&mut self, hostname: &str) -> Option<&mut Machine> {
        self.machines.iter_mut().find(|m| m.hostname == hostname)
    }
}

/// A host with its addresses and installed hardware.
#[derive(Debug, PartialEq, Eq)]
pub struct Machine {
    pub hostname: String,
    pub ips: Vec<IpAddress>,
    pub hardware: Vec<HardwareUnit>,
}

impl Machine {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ips: Vec::new(),
            hardware: Vec::new(),
        }
    }

    pub fn add_ip(&mut self, address: impl Into<String>) {
        self.ips.push(IpAddress::new(address));
    }

    pub fn add_hardware(&mut self, unit: impl Into<HardwareUnit>) {
        self.hardware.push(unit.into());
    }
}

/// Address string, kept verbatim.
#[derive(Debug, PartialEq, Eq)]
pub struct IpAddress {
    pub address: String,
}

impl IpAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

/// Hardware installed in a machine.
#[derive(Debug, PartialEq, Eq)]
pub enum HardwareUnit {
    Processor(Processor),
    Ram(Ram),
    Storage(StorageDevice),
}

impl HardwareUnit {
    /// Kind label shown at the start of the rendered line.
    pub fn kind(&self) -> &'static str {
        match self {
            HardwareUnit::Processor(_) => "Processor",
            HardwareUnit::Ram(_) => "RAM",
            HardwareUnit::Storage(storage) => storage.kind.as_str(),
        }
    }
}

impl From<Processor> for HardwareUnit {
    fn from(processor: Processor) -> Self {
        HardwareUnit::Processor(processor)
    }
}

impl From<Ram> for HardwareUnit {
    fn from(ram: Ram) -> Self {
        HardwareUnit::Ram(ram)
    }
}

impl From<StorageDevice> for HardwareUnit {
    fn from(storage: StorageDevice) -> Self {
        HardwareUnit::Storage(storage)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Processor {
    pub cores: u32,
    /// Clock frequency in MHz
    pub frequency: u32,
}

impl Processor {
    pub fn new(cores: u32, frequency: u32) -> Self {
        Self { cores, frequency }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Ram {
    /// Capacity in MiB
    pub capacity: u64,
}

impl Ram {
    pub fn new(capacity: u64) -> Self {
        Self { capacity }
    }
}

/// Storage technology label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Hdd,
    Ssd,
}

impl StorageKind {
    /// "hdd" in any letter case is a hard disk, everything else is solid state.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("hdd") {
            StorageKind::Hdd
        } else {
            StorageKind::Ssd
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Hdd => "HDD",
            StorageKind::Ssd => "SSD",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Disk with an ordered partition table.
#[derive(Debug, PartialEq, Eq)]
pub struct StorageDevice {
    /// Capacity in GiB
    pub capacity: u64,
    /// Fixed at construction, see [`StorageKind::from_label`]
    pub kind: StorageKind,
    pub partitions: Vec<StoragePartition>,
}

impl StorageDevice {
    pub fn new(capacity: u64, kind: &str) -> Self {
        Self {
            capacity,
            kind: StorageKind::from_label(kind),
            partitions: Vec::new(),
        }
    }

    pub fn add_part(&mut self, size: u64, purpose: impl Into<String>) {
        self.partitions.push(StoragePartition::new(size, purpose));
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct StoragePartition {
    /// Size in GiB
    pub size: u64,
    pub purpose: String,
}

impl StoragePartition {
    pub fn new(size: u64, purpose: impl Into<String>) -> Self {
        Self {
            size,
            purpose: purpose.into(),
        }
    }
}
