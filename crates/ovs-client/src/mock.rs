//! Mock virtual switch client for unit testing
//!
//! Stores bridges and internal ports in memory. Like a real switch, the mock
//! assigns a MAC address when an internal port is created; tests can disable
//! this with [`MockOvsClient::without_mac_assignment`] to exercise the
//! interface-not-ready path.

use crate::error::OvsError;
use crate::ovs_trait::OvsClientTrait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// An internal port record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalPortRecord {
    /// Bridge the port belongs to
    pub bridge: String,
    /// Requested MTU
    pub mtu: u32,
    /// `external-ids:iface-id` tag
    pub iface_id: String,
}

/// Mock virtual switch client for testing
#[derive(Debug, Clone)]
pub struct MockOvsClient {
    pub(crate) bridges: Arc<Mutex<HashSet<String>>>,
    pub(crate) ports: Arc<Mutex<HashMap<String, InternalPortRecord>>>,
    pub(crate) macs: Arc<Mutex<HashMap<String, String>>>,
    pub(crate) assign_macs: bool,
    pub(crate) next_mac: Arc<Mutex<u8>>,
}

impl Default for MockOvsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockOvsClient {
    /// Create a mock that assigns a MAC to every internal port it creates
    pub fn new() -> Self {
        Self {
            bridges: Arc::new(Mutex::new(HashSet::new())),
            ports: Arc::new(Mutex::new(HashMap::new())),
            macs: Arc::new(Mutex::new(HashMap::new())),
            assign_macs: true,
            next_mac: Arc::new(Mutex::new(1)),
        }
    }

    /// Create a mock whose interfaces never report a MAC, simulating a
    /// switch that has not finished bringing the port up
    pub fn without_mac_assignment() -> Self {
        Self {
            assign_macs: false,
            ..Self::new()
        }
    }

    /// Override the MAC reported for an interface (for test setup)
    pub fn set_interface_mac(&self, port: &str, mac: &str) {
        self.macs
            .lock()
            .unwrap()
            .insert(port.to_string(), mac.to_string());
    }

    /// Whether a bridge exists
    pub fn has_bridge(&self, bridge: &str) -> bool {
        self.bridges.lock().unwrap().contains(bridge)
    }

    /// Look up an internal port record
    pub fn port(&self, port: &str) -> Option<InternalPortRecord> {
        self.ports.lock().unwrap().get(port).cloned()
    }
}

#[async_trait::async_trait]
impl OvsClientTrait for MockOvsClient {
    async fn ensure_bridge(&self, bridge: &str) -> Result<(), OvsError> {
        self.bridges.lock().unwrap().insert(bridge.to_string());
        Ok(())
    }

    async fn ensure_internal_port(
        &self,
        bridge: &str,
        port: &str,
        mtu: u32,
        iface_id: &str,
    ) -> Result<(), OvsError> {
        self.ports.lock().unwrap().insert(
            port.to_string(),
            InternalPortRecord {
                bridge: bridge.to_string(),
                mtu,
                iface_id: iface_id.to_string(),
            },
        );
        if self.assign_macs {
            let mut macs = self.macs.lock().unwrap();
            if !macs.contains_key(port) {
                let mut next = self.next_mac.lock().unwrap();
                macs.insert(port.to_string(), format!("0a:58:00:00:00:{:02x}", *next));
                *next += 1;
            }
        }
        Ok(())
    }

    async fn interface_mac(&self, port: &str) -> Result<Option<String>, OvsError> {
        Ok(self.macs.lock().unwrap().get(port).cloned())
    }
}
