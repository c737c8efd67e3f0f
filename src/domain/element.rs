//! ASCII tree rendering for every node of the hierarchy.
//!
//! Each line is `"  " * depth` followed by a branch glyph: `\-` for the last
//! sibling, `+-` otherwise. The network header is the only unprefixed line.

use std::fmt;
use std::io;

use tracing::instrument;

use crate::domain::entities::{
    HardwareUnit, IpAddress, Machine, Network, Processor, Ram, StorageDevice, StoragePartition,
};

/// One indentation unit per depth level.
pub const INDENT: &str = "  ";
/// Glyph for a child that has further siblings after it.
pub const BRANCH: &str = "+-";
/// Glyph for the final child at its level.
pub const LAST_BRANCH: &str = "\\-";

/// Indentation and branch glyph for a line at `depth`.
pub fn prefix(depth: usize, is_last: bool) -> String {
    let glyph = if is_last { LAST_BRANCH } else { BRANCH };
    format!("{}{}", INDENT.repeat(depth), glyph)
}

/// Tree rendering shared by all node kinds.
pub trait Render {
    /// Write this node and its descendants, one line per node.
    fn write_tree<W: fmt::Write>(
        &self,
        out: &mut W,
        depth: usize,
        is_last: bool,
        label: Option<&str>,
    ) -> fmt::Result;

    fn render_string(&self, depth: usize, is_last: bool, label: Option<&str>) -> String {
        let mut out = String::new();
        // writing into a String never fails
        let _ = self.write_tree(&mut out, depth, is_last, label);
        out
    }

    /// Write the rendered subtree to an output stream.
    fn render_to<W: io::Write>(
        &self,
        out: &mut W,
        depth: usize,
        is_last: bool,
        label: Option<&str>,
    ) -> io::Result<()> {
        out.write_all(self.render_string(depth, is_last, label).as_bytes())
    }

    /// Print the subtree to stdout.
    #[instrument(level = "trace", skip(self))]
    fn render(&self, depth: usize, is_last: bool, label: Option<&str>) {
        print!("{}", self.render_string(depth, is_last, label));
    }
}

impl Render for Network {
    fn write_tree<W: fmt::Write>(
        &self,
        out: &mut W,
        depth: usize,
        _is_last: bool,
        _label: Option<&str>,
    ) -> fmt::Result {
        writeln!(out, "Network: {}", self.name)?;
        let count = self.machines.len();
        for (i, machine) in self.machines.iter().enumerate() {
            machine.write_tree(out, depth, i == count - 1, None)?;
        }
        Ok(())
    }
}

impl Render for Machine {
    fn write_tree<W: fmt::Write>(
        &self,
        out: &mut W,
        depth: usize,
        is_last: bool,
        _label: Option<&str>,
    ) -> fmt::Result {
        writeln!(out, "{}Machine: {}", prefix(depth, is_last), self.hostname)?;

        // the final IP is terminal only when no hardware follows it
        let ip_count = self.ips.len();
        for (i, ip) in self.ips.iter().enumerate() {
            let ip_last = i == ip_count - 1 && self.hardware.is_empty();
            ip.write_tree(out, depth + 1, ip_last, None)?;
        }

        let hw_count = self.hardware.len();
        for (i, unit) in self.hardware.iter().enumerate() {
            unit.write_tree(out, depth + 1, i == hw_count - 1, None)?;
        }
        Ok(())
    }
}

impl Render for IpAddress {
    fn write_tree<W: fmt::Write>(
        &self,
        out: &mut W,
        depth: usize,
        is_last: bool,
        _label: Option<&str>,
    ) -> fmt::Result {
        writeln!(out, "{}{}", prefix(depth, is_last), self.address)
    }
}

impl Render for HardwareUnit {
    fn write_tree<W: fmt::Write>(
        &self,
        out: &mut W,
        depth: usize,
        is_last: bool,
        label: Option<&str>,
    ) -> fmt::Result {
        match self {
            HardwareUnit::Processor(processor) => processor.write_tree(out, depth, is_last, label),
            HardwareUnit::Ram(ram) => ram.write_tree(out, depth, is_last, label),
            HardwareUnit::Storage(storage) => storage.write_tree(out, depth, is_last, label),
        }
    }
}

impl Render for Processor {
    fn write_tree<W: fmt::Write>(
        &self,
        out: &mut W,
        depth: usize,
        is_last: bool,
        _label: Option<&str>,
    ) -> fmt::Result {
        writeln!(
            out,
            "{}Processor, {} cores @ {}MHz",
            prefix(depth, is_last),
            self.cores,
            self.frequency
        )
    }
}

impl Render for Ram {
    fn write_tree<W: fmt::Write>(
        &self,
        out: &mut W,
        depth: usize,
        is_last: bool,
        _label: Option<&str>,
    ) -> fmt::Result {
        writeln!(out, "{}RAM, {} MiB", prefix(depth, is_last), self.capacity)
    }
}

impl Render for StorageDevice {
    fn write_tree<W: fmt::Write>(
        &self,
        out: &mut W,
        depth: usize,
        is_last: bool,
        _label: Option<&str>,
    ) -> fmt::Result {
        writeln!(
            out,
            "{}{}, {} GiB",
            prefix(depth, is_last),
            self.kind,
            self.capacity
        )?;
        let count = self.partitions.len();
        for (i, part) in self.partitions.iter().enumerate() {
            let label = format!("[{}]", i);
            part.write_tree(out, depth + 1, i == count - 1, Some(&label))?;
        }
        Ok(())
    }
}

impl Render for StoragePartition {
    fn write_tree<W: fmt::Write>(
        &self,
        out: &mut W,
        depth: usize,
        is_last: bool,
        label: Option<&str>,
    ) -> fmt::Result {
        writeln!(
            out,
            "{}{}: {} GiB, {}",
            prefix(depth, is_last),
            label.unwrap_or(""),
            self.size,
            self.purpose
        )
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0, false, None)
    }
}

/// Any node of the hierarchy.
#[derive(Debug, PartialEq, Eq)]
pub enum Element {
    Network(Network),
    Machine(Machine),
    Ip(IpAddress),
    Hardware(HardwareUnit),
    Partition(StoragePartition),
}

impl Element {
    /// Number of nodes in this subtree, which is also the number of lines it renders.
    pub fn node_count(&self) -> usize {
        match self {
            Element::Network(network) => {
                1 + network.machines.iter().map(machine_node_count).sum::<usize>()
            }
            Element::Machine(machine) => machine_node_count(machine),
            Element::Ip(_) => 1,
            Element::Hardware(unit) => hardware_node_count(unit),
            Element::Partition(_) => 1,
        }
    }
}

fn machine_node_count(machine: &Machine) -> usize {
    1 + machine.ips.len() + machine.hardware.iter().map(hardware_node_count).sum::<usize>()
}

fn hardware_node_count(unit: &HardwareUnit) -> usize {
    match unit {
        HardwareUnit::Storage(storage) => 1 + storage.partitions.len(),
        HardwareUnit::Processor(_) | HardwareUnit::Ram(_) => 1,
    }
}

impl Render for Element {
    fn write_tree<W: fmt::Write>(
        &self,
        out: &mut W,
        depth: usize,
        is_last: bool,
        label: Option<&str>,
    ) -> fmt::Result {
        match self {
            Element::Network(network) => network.write_tree(out, depth, is_last, label),
            Element::Machine(machine) => machine.write_tree(out, depth, is_last, label),
            Element::Ip(ip) => ip.write_tree(out, depth, is_last, label),
            Element::Hardware(unit) => unit.write_tree(out, depth, is_last, label),
            Element::Partition(part) => part.write_tree(out, depth, is_last, label),
        }
    }
}

impl From<Network> for Element {
    fn from(network: Network) -> Self {
        Element::Network(network)
    }
}

impl From<Machine> for Element {
    fn from(machine: Machine) -> Self {
        Element::Machine(machine)
    }
}

impl From<IpAddress> for Element {
    fn from(ip: IpAddress) -> Self {
        Element::Ip(ip)
    }
}

impl From<HardwareUnit> for Element {
    fn from(unit: HardwareUnit) -> Self {
        Element::Hardware(unit)
    }
}

impl From<StoragePartition> for Element {
    fn from(part: StoragePartition) -> Self {
        Element::Partition(part)
    }
}
