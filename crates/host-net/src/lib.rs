//! Host Kernel Networking Client
//!
//! A typed wrapper around iproute2's `ip` command for the link, address, and
//! route operations the node-net controller performs on the management
//! interface. Commands are fire-and-forget: the client classifies exit
//! status as pass/fail and never parses command output.

pub mod client;
pub mod error;
#[path = "trait.rs"]
pub mod host_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::IpClient;
pub use error::HostNetError;
pub use host_trait::HostNetTrait;
#[cfg(feature = "test-util")]
pub use mock::{HostOp, MockHostNet};
