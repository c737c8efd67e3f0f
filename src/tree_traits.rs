/*
termtree renders a root line followed by one line per leaf. With the ASCII palette below
every ancestor level contributes two spaces and each item gets `+-` or `\-`, which is the
same layout the native renderer produces for a network.
 */
use termtree::{GlyphPalette, Tree};
use tracing::instrument;

use crate::domain::{HardwareUnit, Machine, Network, StorageDevice};

/// Two-space indentation with `+-` / `\-` branches.
pub const ASCII_GLYPHS: GlyphPalette = GlyphPalette {
    middle_item: "+",
    last_item: "\\",
    item_indent: "-",
    middle_skip: " ",
    last_skip: " ",
    skip_indent: " ",
};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

fn node(text: String) -> Tree<String> {
    Tree::new(text).with_glyphs(ASCII_GLYPHS)
}

impl TreeNodeConvert for Network {
    #[instrument(level = "debug", skip(self), fields(network = %self.name))]
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.machines.iter().map(|m| m.to_tree_string()).collect();
        node(format!("Network: {}", self.name)).with_leaves(leaves)
    }
}

impl TreeNodeConvert for Machine {
    fn to_tree_string(&self) -> Tree<String> {
        // addresses and hardware are siblings, so the last address only
        // closes the branch when no hardware follows
        let ips = self.ips.iter().map(|ip| node(ip.address.clone()));
        let hardware = self.hardware.iter().map(|unit| unit.to_tree_string());
        node(format!("Machine: {}", self.hostname)).with_leaves(ips.chain(hardware))
    }
}

impl TreeNodeConvert for HardwareUnit {
    fn to_tree_string(&self) -> Tree<String> {
        match self {
            HardwareUnit::Processor(p) => node(format!(
                "Processor, {} cores @ {}MHz",
                p.cores, p.frequency
            )),
            HardwareUnit::Ram(r) => node(format!("RAM, {} MiB", r.capacity)),
            HardwareUnit::Storage(s) => s.to_tree_string(),
        }
    }
}

impl TreeNodeConvert for StorageDevice {
    fn to_tree_string(&self) -> Tree<String> {
        let parts = self.partitions.iter().enumerate().map(|(i, part)| {
            node(format!("[{}]: {} GiB, {}", i, part.size, part.purpose))
        });
        node(format!("{}, {} GiB", self.kind, self.capacity)).with_leaves(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Processor, Ram, Render};

    #[test]
    fn given_network_when_converting_then_matches_native_render() {
        let mut network = Network::new("N");
        let mut machine = Machine::new("h1");
        machine.add_ip("1.2.3.4");
        machine.add_hardware(Processor::new(4, 2500));
        machine.add_hardware(Ram::new(16000));
        network.add_machine(machine);

        let tree = network.to_tree_string().to_string();

        assert_eq!(tree, network.render_string(0, false, None));
    }
}
