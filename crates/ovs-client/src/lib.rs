//! Open vSwitch Client
//!
//! A typed wrapper around the `ovs-vsctl` CLI covering the small surface the
//! node-net controller needs: ensuring the shared integration bridge exists,
//! upserting the node's internal management port, and reading back the MAC
//! address the switch assigned to it.
//!
//! The MAC read is the one operation here that is not an upsert: it is a
//! fresh read on every call because the switch, not the caller, owns the
//! interface's hardware address.

pub mod client;
pub mod error;
#[path = "trait.rs"]
pub mod ovs_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::VsctlClient;
pub use error::OvsError;
pub use ovs_trait::OvsClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockOvsClient;
