//! Hierarchy construction and lookup

use rstest::rstest;

use netinv::domain::{Machine, Network, StorageDevice, StorageKind};

#[rstest]
#[case("HDD", StorageKind::Hdd)]
#[case("hdd", StorageKind::Hdd)]
#[case("Hdd", StorageKind::Hdd)]
#[case("hDD", StorageKind::Hdd)]
#[case("SSD", StorageKind::Ssd)]
#[case("nvme", StorageKind::Ssd)]
#[case("", StorageKind::Ssd)]
#[case("hdd2", StorageKind::Ssd)]
fn given_kind_label_when_creating_storage_then_derives_kind(
    #[case] label: &str,
    #[case] expected: StorageKind,
) {
    let storage = StorageDevice::new(100, label);
    assert_eq!(storage.kind, expected);
}

#[rstest]
#[case(StorageKind::Hdd, "HDD")]
#[case(StorageKind::Ssd, "SSD")]
fn given_storage_kind_when_displayed_then_uses_upper_case_label(
    #[case] kind: StorageKind,
    #[case] label: &str,
) {
    assert_eq!(kind.to_string(), label);
}

fn network_with(hosts: &[&str]) -> Network {
    let mut network = Network::new("lookup");
    for (i, host) in hosts.iter().enumerate() {
        let mut machine = Machine::new(*host);
        machine.add_ip(format!("10.0.0.{}", i));
        network.add_machine(machine);
    }
    network
}

#[test]
fn given_matching_hostname_when_finding_then_returns_machine() {
    let network = network_with(&["a", "b"]);
    let found = network.find_machine("b").expect("b exists");
    assert_eq!(found.ips[0].address, "10.0.0.1");
}

#[test]
fn given_duplicate_hostnames_when_finding_then_returns_first_match() {
    let network = network_with(&["dup", "dup"]);
    let found = network.find_machine("dup").expect("dup exists");
    assert_eq!(found.ips[0].address, "10.0.0.0");
}

#[rstest]
#[case(&[], "a")]
#[case(&["a", "b"], "c")]
#[case(&["a"], "a ")]
#[case(&["a"], "")]
fn given_no_exact_match_when_finding_then_returns_none(#[case] hosts: &[&str], #[case] query: &str) {
    let network = network_with(hosts);
    assert!(network.find_machine(query).is_none());
}

#[test]
fn given_added_machines_when_listing_then_keeps_insertion_order_without_dedup() {
    let network = network_with(&["z", "a", "z"]);
    let hosts: Vec<&str> = network
        .machines
        .iter()
        .map(|m| m.hostname.as_str())
        .collect();
    assert_eq!(hosts, ["z", "a", "z"]);
}
