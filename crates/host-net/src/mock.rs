//! Mock host networking client for unit testing
//!
//! Records every operation in call order so tests can assert the exact
//! configuration sequence. Individual operations can be made to fail to
//! exercise abort-on-first-error behavior.

use crate::error::HostNetError;
use crate::host_trait::HostNetTrait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// A recorded host networking operation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostOp {
    /// `ip link set <dev> up`
    LinkSetUp(String),
    /// `ip addr flush dev <dev>`
    AddrFlush(String),
    /// `ip addr add <cidr> dev <dev>`
    AddrAdd {
        /// Target link
        dev: String,
        /// Address in `addr/prefix` form
        cidr: String,
    },
    /// `ip route flush <subnet>`
    RouteFlush(String),
    /// `ip route add <subnet> via <via>`
    RouteAdd {
        /// Destination subnet
        subnet: String,
        /// Gateway address
        via: String,
    },
}

/// Mock host networking client for testing
#[derive(Debug, Clone, Default)]
pub struct MockHostNet {
    pub(crate) ops: Arc<Mutex<Vec<HostOp>>>,
    pub(crate) failing: Arc<Mutex<HashSet<HostOp>>>,
}

impl MockHostNet {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a specific operation fail when issued (for test setup)
    pub fn fail_on(&self, op: HostOp) {
        self.failing.lock().unwrap().insert(op);
    }

    /// All operations issued so far, in call order
    pub fn ops(&self) -> Vec<HostOp> {
        self.ops.lock().unwrap().clone()
    }

    fn record(&self, op: HostOp) -> Result<(), HostNetError> {
        if self.failing.lock().unwrap().contains(&op) {
            return Err(HostNetError::Command {
                command: format!("{op:?}"),
                output: "injected failure".to_string(),
            });
        }
        self.ops.lock().unwrap().push(op);
        Ok(())
    }
}

#[async_trait::async_trait]
impl HostNetTrait for MockHostNet {
    async fn link_set_up(&self, dev: &str) -> Result<(), HostNetError> {
        self.record(HostOp::LinkSetUp(dev.to_string()))
    }

    async fn addr_flush(&self, dev: &str) -> Result<(), HostNetError> {
        self.record(HostOp::AddrFlush(dev.to_string()))
    }

    async fn addr_add(&self, dev: &str, cidr: &str) -> Result<(), HostNetError> {
        self.record(HostOp::AddrAdd {
            dev: dev.to_string(),
            cidr: cidr.to_string(),
        })
    }

    async fn route_flush(&self, subnet: &str) -> Result<(), HostNetError> {
        self.record(HostOp::RouteFlush(subnet.to_string()))
    }

    async fn route_add(&self, subnet: &str, via: &str) -> Result<(), HostNetError> {
        self.record(HostOp::RouteAdd {
            subnet: subnet.to_string(),
            via: via.to_string(),
        })
    }
}
