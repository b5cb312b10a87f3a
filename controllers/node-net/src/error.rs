//! Controller-specific error types.
//!
//! Every variant is terminal for the current provisioning attempt: nothing
//! is retried internally and no partial-state cleanup is performed. The
//! caller decides whether to re-run the whole idempotent sequence.

use host_net::HostNetError;
use ovn_nb_client::NbError;
use ovs_client::OvsError;
use thiserror::Error;

/// Errors that can occur while provisioning a node's overlay attachment
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The node's local subnet did not parse as CIDR
    #[error("invalid subnet {subnet}: {source}")]
    InvalidSubnet {
        /// The offending input
        subnet: String,
        /// Underlying parse error
        source: ipnetwork::IpNetworkError,
    },

    /// A northbound database command failed
    #[error("control plane error: {0}")]
    ControlPlane(#[from] NbError),

    /// A virtual switch command failed
    #[error("virtual switch error: {0}")]
    Switch(#[from] OvsError),

    /// The management interface was created but reports no usable MAC;
    /// provisioning cannot continue without a real hardware address
    #[error("interface {0} has no usable MAC address")]
    InterfaceNotReady(String),

    /// A host networking command failed
    #[error("host network configuration failed: {0}")]
    HostConfig(#[from] HostNetError),

    /// An expected pre-provisioned cluster load balancer is missing
    #[error("cluster {0} load balancer not found")]
    LoadBalancerNotFound(&'static str),
}
