//! OvsClientTrait for mocking
//!
//! Abstracts the virtual switch client so provisioning logic can run against
//! an in-memory mock in unit tests.

use crate::error::OvsError;

/// Trait for Open vSwitch operations
#[async_trait::async_trait]
pub trait OvsClientTrait: Send + Sync {
    /// Create the bridge if it does not exist yet (`--may-exist add-br`).
    async fn ensure_bridge(&self, bridge: &str) -> Result<(), OvsError>;

    /// Create or refresh an internal port on the bridge, requesting the
    /// given MTU and tagging the interface with `external-ids:iface-id` so
    /// the switch can bind it to the matching logical switch port.
    async fn ensure_internal_port(
        &self,
        bridge: &str,
        port: &str,
        mtu: u32,
        iface_id: &str,
    ) -> Result<(), OvsError>;

    /// Read the MAC address in use on an interface. Returns `None` when the
    /// switch has not assigned a usable address yet (missing record, empty
    /// value, or all-zero MAC).
    async fn interface_mac(&self, port: &str) -> Result<Option<String>, OvsError>;
}
