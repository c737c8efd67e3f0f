//! Rendering of whole hierarchies and glyph placement

use netinv::application::sample_network;
use netinv::domain::{
    Element, HardwareUnit, Machine, Network, Processor, Ram, Render, StorageDevice,
};

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn given_single_machine_network_when_rendering_then_ram_line_is_terminal() {
    let mut network = Network::new("N");
    let mut machine = Machine::new("h1");
    machine.add_ip("1.2.3.4");
    machine.add_hardware(Processor::new(4, 2500));
    machine.add_hardware(Ram::new(16000));
    network.add_machine(machine);

    let text = network.render_string(0, false, None);

    assert_eq!(
        lines(&text),
        [
            "Network: N",
            "\\-Machine: h1",
            "  +-1.2.3.4",
            "  +-Processor, 4 cores @ 2500MHz",
            "  \\-RAM, 16000 MiB",
        ]
    );
}

#[test]
fn given_hdd_with_two_partitions_when_rendering_then_labels_partitions() {
    let mut storage = StorageDevice::new(2000, "hdd");
    storage.add_part(500, "system");
    storage.add_part(1500, "data");

    let text = storage.render_string(0, true, None);

    assert_eq!(
        lines(&text),
        [
            "\\-HDD, 2000 GiB",
            "  +-[0]: 500 GiB, system",
            "  \\-[1]: 1500 GiB, data",
        ]
    );
}

#[test]
fn given_sample_network_when_rendering_then_produces_full_diagram() {
    let expected = "\
Network: MISIS network
+-Machine: server1.misis.ru
  +-192.168.1.1
  +-Processor, 4 cores @ 2500MHz
  \\-RAM, 16000 MiB
\\-Machine: server2.misis.ru
  +-10.0.0.1
  +-Processor, 8 cores @ 3200MHz
  \\-HDD, 2000 GiB
    +-[0]: 500 GiB, system
    \\-[1]: 1500 GiB, data
";
    assert_eq!(sample_network().render_string(0, false, None), expected);
}

// ============================================================
// Glyph selection
// ============================================================

#[test]
fn given_ips_and_hardware_when_rendering_then_final_ip_is_not_terminal() {
    let mut machine = Machine::new("m");
    machine.add_ip("10.0.0.1");
    machine.add_ip("10.0.0.2");
    machine.add_hardware(Ram::new(1024));

    let text = machine.render_string(1, false, None);

    assert_eq!(
        lines(&text),
        [
            "  +-Machine: m",
            "    +-10.0.0.1",
            "    +-10.0.0.2",
            "    \\-RAM, 1024 MiB",
        ]
    );
}

#[test]
fn given_multiple_machines_when_rendering_then_only_final_machine_is_terminal() {
    let mut network = Network::new("three");
    for host in ["a", "b", "c"] {
        network.add_machine(Machine::new(host));
    }

    let text = network.render_string(0, false, None);

    assert_eq!(
        lines(&text),
        ["Network: three", "+-Machine: a", "+-Machine: b", "\\-Machine: c"]
    );
}

#[test]
fn given_network_at_depth_when_rendering_then_header_stays_unprefixed() {
    let mut network = Network::new("nested");
    network.add_machine(Machine::new("a"));

    let text = network.render_string(2, true, None);

    assert_eq!(lines(&text), ["Network: nested", "    \\-Machine: a"]);
}

#[test]
fn given_partition_label_when_rendering_then_label_precedes_size() {
    let mut storage = StorageDevice::new(64, "ssd");
    storage.add_part(64, "scratch");
    let part = &storage.partitions[0];

    assert_eq!(
        part.render_string(0, false, Some("[7]")),
        "+-[7]: 64 GiB, scratch\n"
    );
}

// ============================================================
// Structure
// ============================================================

#[test]
fn given_any_tree_when_rendering_then_one_line_per_node_in_preorder() {
    let network = sample_network();
    let element = Element::from(network);

    let text = element.render_string(0, false, None);

    assert_eq!(text.lines().count(), element.node_count());
    assert_eq!(element.node_count(), 11);

    let hosts: Vec<&str> = text
        .lines()
        .filter_map(|l| l.split("Machine: ").nth(1))
        .collect();
    assert_eq!(hosts, ["server1.misis.ru", "server2.misis.ru"]);
}

#[test]
fn given_rendering_when_done_then_tree_is_unchanged() {
    let network = sample_network();
    let before = format!("{:?}", network);

    network.render(0, false, None);
    let _ = network.render_string(0, false, None);

    assert_eq!(format!("{:?}", network), before);
}

#[test]
fn given_hardware_unit_kinds_when_rendering_then_uses_kind_labels() {
    let units = [
        HardwareUnit::from(Processor::new(16, 4000)),
        HardwareUnit::from(Ram::new(65536)),
        HardwareUnit::from(StorageDevice::new(1000, "SSD")),
    ];
    let rendered: Vec<String> = units
        .iter()
        .map(|u| u.render_string(0, false, None))
        .collect();

    assert_eq!(
        rendered,
        [
            "+-Processor, 16 cores @ 4000MHz\n",
            "+-RAM, 65536 MiB\n",
            "+-SSD, 1000 GiB\n",
        ]
    );
}
