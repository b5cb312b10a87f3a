//! Address, name, and MAC derivation for node provisioning
//!
//! Everything here is a pure function of its inputs so the same node always
//! derives the same addresses and names, which is what makes the whole
//! provisioning sequence re-runnable.

use crate::error::ProvisionError;
use ipnetwork::IpNetwork;
use std::net::IpAddr;
use uuid::Uuid;

/// Prefix shared by the management logical port and host interface names.
pub(crate) const MGMT_PREFIX: &str = "mgt-";

/// Longest node-name segment that still fits the kernel's 15-character
/// interface name limit after the prefix.
const IFACE_NODE_NAME_MAX: usize = 11;

/// Addresses derived from a node's local subnet
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeAddresses {
    /// Router address (first host address), bare
    pub router_ip: IpAddr,
    /// Router address in `addr/prefix` form
    pub router_cidr: String,
    /// Management address (second host address), bare
    pub management_ip: IpAddr,
    /// Management address in `addr/prefix` form
    pub management_cidr: String,
}

/// Derive the node's router and management addresses from its local subnet.
///
/// The router gets the first address after the network address, the
/// management port the one after that; both carry the subnet's mask length.
pub(crate) fn derive_node_addresses(local_subnet: &str) -> Result<NodeAddresses, ProvisionError> {
    let network: IpNetwork =
        local_subnet
            .parse()
            .map_err(|source| ProvisionError::InvalidSubnet {
                subnet: local_subnet.to_string(),
                source,
            })?;

    let prefix = network.prefix();
    let router_ip = next_ip(network.network());
    let management_ip = next_ip(router_ip);

    Ok(NodeAddresses {
        router_ip,
        router_cidr: format!("{router_ip}/{prefix}"),
        management_ip,
        management_cidr: format!("{management_ip}/{prefix}"),
    })
}

/// The address immediately following `ip`
pub(crate) fn next_ip(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V4(v4) => IpAddr::V4((u32::from(v4).wrapping_add(1)).into()),
        IpAddr::V6(v6) => IpAddr::V6((u128::from(v6).wrapping_add(1)).into()),
    }
}

/// Name of the node's logical router port (router-to-switch)
pub(crate) fn router_port_name(node_name: &str) -> String {
    format!("rtos-{node_name}")
}

/// Name of the node's router-facing switch port (switch-to-router)
pub(crate) fn switch_router_port_name(node_name: &str) -> String {
    format!("stor-{node_name}")
}

/// Name of the node's host-facing logical switch port
pub(crate) fn management_port_name(node_name: &str) -> String {
    format!("{MGMT_PREFIX}{node_name}")
}

/// Host interface name for the management port, truncated so the prefixed
/// name never exceeds the kernel limit
pub(crate) fn management_interface_name(node_name: &str) -> String {
    let segment: String = node_name.chars().take(IFACE_NODE_NAME_MAX).collect();
    format!("{MGMT_PREFIX}{segment}")
}

/// Generate a random unicast MAC address with the locally-administered bit set
pub(crate) fn generate_mac() -> String {
    let uuid = Uuid::new_v4();
    let bytes = uuid.as_bytes();
    let b0 = (bytes[0] & 0xfe) | 0x02;
    format!(
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        b0, bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
    )
}
