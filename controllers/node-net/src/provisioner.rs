//! Node topology provisioning
//!
//! Establishes a node's logical switch, connects it to the cluster's
//! distributed router, creates the management port on the integration
//! bridge, converges host networking, and binds the cluster load balancers
//! to the switch. Every control-plane mutation is an upsert, so the whole
//! sequence can be re-run to converge a partially provisioned node.

use crate::config::Config;
use crate::error::ProvisionError;
use crate::host_config;
use crate::net;
use host_net::HostNetTrait;
use ovn_nb_client::NbClientTrait;
use ovs_client::OvsClientTrait;
use std::sync::Arc;
use tracing::{debug, info};

/// Discovery tag of the cluster's TCP load balancer
pub(crate) const LB_TCP_TAG: &str = "cluster-lb-tcp";
/// Discovery tag of the cluster's UDP load balancer
pub(crate) const LB_UDP_TAG: &str = "cluster-lb-udp";

/// Provisions a node's overlay network attachment point
pub(crate) struct Provisioner {
    pub(crate) nb: Arc<dyn NbClientTrait>,
    pub(crate) ovs: Arc<dyn OvsClientTrait>,
    pub(crate) host: Arc<dyn HostNetTrait>,
    pub(crate) config: Config,
}

impl Provisioner {
    /// Create a provisioner over the given clients
    pub(crate) fn new(
        nb: Arc<dyn NbClientTrait>,
        ovs: Arc<dyn OvsClientTrait>,
        host: Arc<dyn HostNetTrait>,
        config: Config,
    ) -> Self {
        Self {
            nb,
            ovs,
            host,
            config,
        }
    }

    /// Provision the node's logical switch, router port, and management
    /// interface, then bind the cluster load balancers to the switch.
    ///
    /// Any single failure aborts immediately; no cleanup is attempted. The
    /// caller may simply re-run the whole sequence.
    pub(crate) async fn provision_node(
        &self,
        node_name: &str,
        local_subnet: &str,
        cluster_subnet: &str,
    ) -> Result<(), ProvisionError> {
        let addrs = net::derive_node_addresses(local_subnet)?;

        // The node registers with whatever case its hostname carries, but
        // the rest of the cluster observes it lower-cased. Control-plane
        // names are case-sensitive, so normalize once at this boundary to
        // keep lookups consistent with the externally observed identity.
        let node_name = node_name.to_lowercase();

        info!(node = %node_name, subnet = local_subnet, "provisioning node attachment");

        // Router port first: reuse its MAC if an earlier run created it.
        let router_port = net::router_port_name(&node_name);
        let router_mac = match self.nb.router_port_mac(&router_port).await? {
            Some(mac) => {
                debug!(port = %router_port, mac = %mac, "reusing existing router port");
                mac
            }
            None => {
                let mac = net::generate_mac();
                let router = self.nb.cluster_router().await?;
                self.nb
                    .create_router_port(&router, &router_port, &mac, &addrs.router_cidr)
                    .await?;
                mac
            }
        };

        // Logical switch with subnet and gateway metadata, then its
        // router-facing port.
        self.nb
            .ensure_switch(&node_name, local_subnet, &addrs.router_cidr)
            .await?;
        self.nb
            .ensure_router_attachment(
                &node_name,
                &net::switch_router_port_name(&node_name),
                &router_port,
                &router_mac,
            )
            .await?;

        self.ovs.ensure_bridge(&self.config.bridge).await?;

        // Internal management interface. Its iface-id must equal the
        // logical switch port name so the switch binds the two together.
        let interface = net::management_interface_name(&node_name);
        let port = net::management_port_name(&node_name);
        self.ovs
            .ensure_internal_port(&self.config.bridge, &interface, self.config.mtu, &port)
            .await?;

        // The MAC is assigned by the switch and read back fresh each run.
        let interface_mac = self
            .ovs
            .interface_mac(&interface)
            .await?
            .ok_or_else(|| ProvisionError::InterfaceNotReady(interface.clone()))?;

        self.nb
            .ensure_switch_port(
                &node_name,
                &port,
                &format!("{interface_mac} {}", addrs.management_ip),
            )
            .await?;

        host_config::configure_management_interface(
            self.host.as_ref(),
            cluster_subnet,
            &addrs.router_ip.to_string(),
            &interface,
            &addrs.management_cidr,
        )
        .await?;

        // Cluster load balancers are pre-provisioned out of band and found
        // by tag. TCP binds first as an overwrite; UDP is additive so both
        // end up referenced by the switch.
        let tcp_lb = self
            .nb
            .find_load_balancer(LB_TCP_TAG)
            .await?
            .ok_or(ProvisionError::LoadBalancerNotFound("TCP"))?;
        self.nb.set_switch_load_balancer(&node_name, &tcp_lb).await?;

        let udp_lb = self
            .nb
            .find_load_balancer(LB_UDP_TAG)
            .await?
            .ok_or(ProvisionError::LoadBalancerNotFound("UDP"))?;
        self.nb.add_switch_load_balancer(&node_name, &udp_lb).await?;

        info!(node = %node_name, "node attachment provisioned");
        Ok(())
    }
}
