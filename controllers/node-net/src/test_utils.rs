//! Test utilities for unit testing the provisioner
//!
//! The mock clients share state behind `Arc`s, so tests clone them before
//! handing them to the provisioner and keep the clone for assertions.

use crate::config::Config;
use crate::provisioner::Provisioner;
use host_net::MockHostNet;
use ovn_nb_client::MockNbClient;
use ovs_client::MockOvsClient;
use std::sync::Arc;

pub const CLUSTER_ROUTER_UUID: &str = "cluster-router-uuid";
pub const TCP_LB_UUID: &str = "tcp-lb-uuid";
pub const UDP_LB_UUID: &str = "udp-lb-uuid";

/// Northbound mock with the out-of-band cluster objects already present:
/// the distributed router and both cluster load balancers
pub fn seeded_nb_client() -> MockNbClient {
    let nb = MockNbClient::new();
    nb.set_cluster_router(CLUSTER_ROUTER_UUID);
    nb.add_load_balancer(TCP_LB_UUID, "cluster-lb-tcp");
    nb.add_load_balancer(UDP_LB_UUID, "cluster-lb-udp");
    nb
}

/// Provisioner over mock clients with default configuration
pub fn test_provisioner(nb: MockNbClient, ovs: MockOvsClient, host: MockHostNet) -> Provisioner {
    Provisioner::new(
        Arc::new(nb),
        Arc::new(ovs),
        Arc::new(host),
        Config::default(),
    )
}
