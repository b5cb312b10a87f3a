//! HostNetTrait for mocking
//!
//! The link/address/route capability set consumed by the management
//! interface configurator, abstracted so the strictly ordered configuration
//! sequence can be asserted against an in-memory mock.

use crate::error::HostNetError;

/// Trait for host kernel networking operations
#[async_trait::async_trait]
pub trait HostNetTrait: Send + Sync {
    /// Set a link administratively up (`ip link set <dev> up`).
    async fn link_set_up(&self, dev: &str) -> Result<(), HostNetError>;

    /// Flush all addresses from a link (`ip addr flush dev <dev>`).
    async fn addr_flush(&self, dev: &str) -> Result<(), HostNetError>;

    /// Add an `addr/prefix` address to a link (`ip addr add`).
    async fn addr_add(&self, dev: &str, cidr: &str) -> Result<(), HostNetError>;

    /// Flush any route to a subnet (`ip route flush <subnet>`).
    async fn route_flush(&self, subnet: &str) -> Result<(), HostNetError>;

    /// Add a route to a subnet via a gateway (`ip route add <subnet> via <via>`).
    async fn route_add(&self, subnet: &str, via: &str) -> Result<(), HostNetError>;
}
