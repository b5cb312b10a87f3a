//! Management interface host configuration
//!
//! Converges the host kernel side of the management port: link state,
//! address, and the route to the cluster pod subnet. The sequence is
//! strictly ordered and aborts on the first failing command.

use host_net::{HostNetError, HostNetTrait};
use tracing::info;

/// Bring up the management interface, assign its derived address, and
/// install the route to the cluster pod subnet via the node's router.
///
/// Address and route state is flushed before assignment so a previously or
/// partially provisioned interface converges to the same final state.
pub(crate) async fn configure_management_interface(
    host: &dyn HostNetTrait,
    cluster_subnet: &str,
    router_ip: &str,
    interface: &str,
    interface_cidr: &str,
) -> Result<(), HostNetError> {
    host.link_set_up(interface).await?;

    // The interface may survive an earlier run with stale state.
    host.addr_flush(interface).await?;
    host.addr_add(interface, interface_cidr).await?;

    host.route_flush(cluster_subnet).await?;
    host.route_add(cluster_subnet, router_ip).await?;

    info!(
        interface,
        address = interface_cidr,
        route = %format!("{cluster_subnet} via {router_ip}"),
        "management interface configured"
    );
    Ok(())
}
