//! NbClientTrait for mocking
//!
//! This trait abstracts the northbound database client so the provisioning
//! sequence can be unit-tested against an in-memory mock instead of a live
//! OVN deployment. The concrete `NbctlClient` implements this trait.

use crate::error::NbError;

/// Trait for OVN northbound database operations
///
/// All mutating methods are upserts: the concrete client passes
/// `--may-exist` so re-issuing a command against an existing record is a
/// no-op beyond attribute refresh.
#[async_trait::async_trait]
pub trait NbClientTrait: Send + Sync {
    /// Get the MAC address of an existing logical router port, or `None`
    /// if the port has not been created yet.
    async fn router_port_mac(&self, port: &str) -> Result<Option<String>, NbError>;

    /// Resolve the UUID of the cluster's single distributed router by its
    /// discovery tag (`external_ids:cluster-router=yes`). The router is
    /// provisioned out of band; a missing router is `NbError::NotFound`.
    async fn cluster_router(&self) -> Result<String, NbError>;

    /// Create a logical router port with the given MAC and `addr/prefix`
    /// network on the named router.
    async fn create_router_port(
        &self,
        router: &str,
        port: &str,
        mac: &str,
        network: &str,
    ) -> Result<(), NbError>;

    /// Create the node's logical switch and set its subnet and gateway-IP
    /// attributes.
    async fn ensure_switch(&self, switch: &str, subnet: &str, gateway: &str)
        -> Result<(), NbError>;

    /// Create the router-facing switch port: `type=router`, bound to
    /// `router_port`, addresses set to the router MAC.
    async fn ensure_router_attachment(
        &self,
        switch: &str,
        port: &str,
        router_port: &str,
        mac: &str,
    ) -> Result<(), NbError>;

    /// Create a plain logical switch port and set its addresses
    /// (`"<mac> <ip>"`).
    async fn ensure_switch_port(
        &self,
        switch: &str,
        port: &str,
        addresses: &str,
    ) -> Result<(), NbError>;

    /// Find a load balancer UUID by its `external_ids` discovery tag,
    /// e.g. `cluster-lb-tcp`. Returns `None` if no match exists.
    async fn find_load_balancer(&self, tag: &str) -> Result<Option<String>, NbError>;

    /// Bind a load balancer to a switch, replacing any existing binding.
    async fn set_switch_load_balancer(&self, switch: &str, lb: &str) -> Result<(), NbError>;

    /// Bind an additional load balancer to a switch, keeping existing ones.
    async fn add_switch_load_balancer(&self, switch: &str, lb: &str) -> Result<(), NbError>;
}
