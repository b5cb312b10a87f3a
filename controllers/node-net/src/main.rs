//! Node Network Controller
//!
//! Provisions the per-node attachment point in the overlay network fabric:
//! - Logical switch and distributed-router port for the node in the OVN
//!   northbound database
//! - Internal management port on the integration bridge, with addresses
//!   derived deterministically from the node's local subnet
//! - Host-side address and route configuration so the node can reach the
//!   cluster-wide pod subnet
//! - Cluster load-balancer bindings on the node's logical switch
//!
//! The whole sequence is idempotent: every control-plane mutation is an
//! upsert, so re-running the controller converges a partially provisioned
//! node instead of failing.

mod config;
mod error;
mod host_config;
mod net;
mod provisioner;
#[cfg(test)]
mod provisioner_test;
#[cfg(test)]
mod test_utils;

use anyhow::bail;
use config::Config;
use host_net::IpClient;
use ovn_nb_client::NbctlClient;
use ovs_client::VsctlClient;
use provisioner::Provisioner;
use std::env;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        bail!("usage: node-net-controller <node-name> <local-subnet> <cluster-subnet>");
    }
    let (node_name, local_subnet, cluster_subnet) = (&args[1], &args[2], &args[3]);

    let config = Config::load()?;

    info!("Starting Node Network Controller");
    info!("Configuration:");
    info!("  Node: {}", node_name);
    info!("  Local subnet: {}", local_subnet);
    info!("  Cluster subnet: {}", cluster_subnet);
    info!("  MTU: {}", config.mtu);

    let provisioner = Provisioner::new(
        Arc::new(NbctlClient::new(config.nbctl.as_str())),
        Arc::new(VsctlClient::new(config.vsctl.as_str())),
        Arc::new(IpClient::new(config.ip.as_str())),
        config,
    );

    provisioner
        .provision_node(node_name, local_subnet, cluster_subnet)
        .await?;

    Ok(())
}
