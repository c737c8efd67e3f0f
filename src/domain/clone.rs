//! Explicit recursive duplication of the hierarchy.
//!
//! Every implementation builds fresh owned storage for each field and child
//! sequence, so a copy shares nothing with its source.

use crate::domain::element::Element;
use crate::domain::entities::{
    HardwareUnit, IpAddress, Machine, Network, Processor, Ram, StorageDevice, StoragePartition,
};

pub trait DeepClone {
    fn deep_clone(&self) -> Self;
}

/// Duplicate any node together with all of its descendants.
pub fn deep_clone(element: &Element) -> Element {
    element.deep_clone()
}

fn clone_all<T: DeepClone>(items: &[T]) -> Vec<T> {
    items.iter().map(DeepClone::deep_clone).collect()
}

impl DeepClone for String {
    fn deep_clone(&self) -> Self {
        self.as_str().to_owned()
    }
}

impl DeepClone for Network {
    fn deep_clone(&self) -> Self {
        Self {
            name: self.name.deep_clone(),
            machines: clone_all(&self.machines),
        }
    }
}

impl DeepClone for Machine {
    fn deep_clone(&self) -> Self {
        Self {
            hostname: self.hostname.deep_clone(),
            ips: clone_all(&self.ips),
            hardware: clone_all(&self.hardware),
        }
    }
}

impl DeepClone for IpAddress {
    fn deep_clone(&self) -> Self {
        Self {
            address: self.address.deep_clone(),
        }
    }
}

impl DeepClone for HardwareUnit {
    fn deep_clone(&self) -> Self {
        match self {
            HardwareUnit::Processor(processor) => HardwareUnit::Processor(processor.deep_clone()),
            HardwareUnit::Ram(ram) => HardwareUnit::Ram(ram.deep_clone()),
            HardwareUnit::Storage(storage) => HardwareUnit::Storage(storage.deep_clone()),
        }
    }
}

impl DeepClone for Processor {
    fn deep_clone(&self) -> Self {
        Self {
            cores: self.cores,
            frequency: self.frequency,
        }
    }
}

impl DeepClone for Ram {
    fn deep_clone(&self) -> Self {
        Self {
            capacity: self.capacity,
        }
    }
}

impl DeepClone for StorageDevice {
    fn deep_clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            kind: self.kind,
            partitions: clone_all(&self.partitions),
        }
    }
}

impl DeepClone for StoragePartition {
    fn deep_clone(&self) -> Self {
        Self {
            size: self.size,
            purpose: self.purpose.deep_clone(),
        }
    }
}

impl DeepClone for Element {
    fn deep_clone(&self) -> Self {
        match self {
            Element::Network(network) => Element::Network(network.deep_clone()),
            Element::Machine(machine) => Element::Machine(machine.deep_clone()),
            Element::Ip(ip) => Element::Ip(ip.deep_clone()),
            Element::Hardware(unit) => Element::Hardware(unit.deep_clone()),
            Element::Partition(part) => Element::Partition(part.deep_clone()),
        }
    }
}
