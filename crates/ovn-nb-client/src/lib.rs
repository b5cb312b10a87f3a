//! OVN Northbound Database Client
//!
//! A thin, typed wrapper around the `ovn-nbctl` CLI for the logical-topology
//! operations the node-net controller performs: logical switches, router
//! ports, switch ports, and load-balancer bindings.
//!
//! Every mutating operation carries OVN's `--may-exist` semantics, so each
//! method is an idempotent upsert and a whole provisioning sequence can be
//! re-run safely after a partial failure.
//!
//! # Example
//!
//! ```no_run
//! use ovn_nb_client::{NbctlClient, NbClientTrait};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let nb = NbctlClient::new("ovn-nbctl");
//!
//! // Reuse the router port MAC if a previous run already created it.
//! if nb.router_port_mac("rtos-node-a").await?.is_none() {
//!     let router = nb.cluster_router().await?;
//!     nb.create_router_port(&router, "rtos-node-a", "0a:58:0a:01:02:01", "10.1.2.1/24")
//!         .await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
#[path = "trait.rs"]
pub mod nb_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::NbctlClient;
pub use error::NbError;
pub use nb_trait::NbClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockNbClient;
