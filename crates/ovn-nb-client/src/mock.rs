//! Mock northbound client for unit testing
//!
//! Stores logical-topology records in memory so provisioning logic can be
//! exercised without a running OVN deployment. Mutating methods mirror the
//! upsert semantics of the real client: re-creating an existing record
//! refreshes its attributes instead of failing.

use crate::error::NbError;
use crate::nb_trait::NbClientTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A logical router port record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterPortRecord {
    /// Router the port is attached to
    pub router: String,
    /// Port MAC address
    pub mac: String,
    /// Port network in `addr/prefix` form
    pub network: String,
}

/// A logical switch record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchRecord {
    /// `other-config:subnet` attribute
    pub subnet: String,
    /// `external-ids:gateway_ip` attribute
    pub gateway_ip: String,
    /// Bound load balancer UUIDs, in binding order
    pub load_balancers: Vec<String>,
}

/// A logical switch port record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchPortRecord {
    /// Router-facing port (`type=router`)
    RouterAttachment {
        /// Owning switch
        switch: String,
        /// Referenced logical router port
        router_port: String,
        /// Router MAC carried in `addresses`
        mac: String,
    },
    /// Host-facing port with explicit `addresses`
    Host {
        /// Owning switch
        switch: String,
        /// `"<mac> <ip>"` addresses string
        addresses: String,
    },
}

/// Mock northbound client for testing
#[derive(Debug, Clone, Default)]
pub struct MockNbClient {
    pub(crate) cluster_router: Arc<Mutex<Option<String>>>,
    pub(crate) router_ports: Arc<Mutex<HashMap<String, RouterPortRecord>>>,
    pub(crate) switches: Arc<Mutex<HashMap<String, SwitchRecord>>>,
    pub(crate) switch_ports: Arc<Mutex<HashMap<String, SwitchPortRecord>>>,
    // UUID -> discovery tag
    pub(crate) load_balancers: Arc<Mutex<HashMap<String, String>>>,
    // Discovery tags looked up via find_load_balancer, in call order
    pub(crate) lb_lookups: Arc<Mutex<Vec<String>>>,
}

impl MockNbClient {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cluster distributed router (for test setup)
    pub fn set_cluster_router(&self, uuid: impl Into<String>) {
        *self.cluster_router.lock().unwrap() = Some(uuid.into());
    }

    /// Seed an existing router port (for test setup)
    pub fn add_router_port(&self, port: &str, router: &str, mac: &str, network: &str) {
        self.router_ports.lock().unwrap().insert(
            port.to_string(),
            RouterPortRecord {
                router: router.to_string(),
                mac: mac.to_string(),
                network: network.to_string(),
            },
        );
    }

    /// Seed a load balancer discoverable by tag (for test setup)
    pub fn add_load_balancer(&self, uuid: &str, tag: &str) {
        self.load_balancers
            .lock()
            .unwrap()
            .insert(uuid.to_string(), tag.to_string());
    }

    /// Look up a router port record
    pub fn router_port(&self, port: &str) -> Option<RouterPortRecord> {
        self.router_ports.lock().unwrap().get(port).cloned()
    }

    /// Look up a switch record
    pub fn switch(&self, switch: &str) -> Option<SwitchRecord> {
        self.switches.lock().unwrap().get(switch).cloned()
    }

    /// Look up a switch port record
    pub fn switch_port(&self, port: &str) -> Option<SwitchPortRecord> {
        self.switch_ports.lock().unwrap().get(port).cloned()
    }

    /// Discovery tags passed to `find_load_balancer`, in call order
    pub fn load_balancer_lookups(&self) -> Vec<String> {
        self.lb_lookups.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NbClientTrait for MockNbClient {
    async fn router_port_mac(&self, port: &str) -> Result<Option<String>, NbError> {
        Ok(self
            .router_ports
            .lock()
            .unwrap()
            .get(port)
            .map(|r| r.mac.clone()))
    }

    async fn cluster_router(&self) -> Result<String, NbError> {
        self.cluster_router
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| NbError::NotFound("cluster distributed router".to_string()))
    }

    async fn create_router_port(
        &self,
        router: &str,
        port: &str,
        mac: &str,
        network: &str,
    ) -> Result<(), NbError> {
        // may-exist: keep the existing record untouched
        self.router_ports
            .lock()
            .unwrap()
            .entry(port.to_string())
            .or_insert_with(|| RouterPortRecord {
                router: router.to_string(),
                mac: mac.to_string(),
                network: network.to_string(),
            });
        Ok(())
    }

    async fn ensure_switch(
        &self,
        switch: &str,
        subnet: &str,
        gateway: &str,
    ) -> Result<(), NbError> {
        let mut switches = self.switches.lock().unwrap();
        let record = switches.entry(switch.to_string()).or_default();
        record.subnet = subnet.to_string();
        record.gateway_ip = gateway.to_string();
        Ok(())
    }

    async fn ensure_router_attachment(
        &self,
        switch: &str,
        port: &str,
        router_port: &str,
        mac: &str,
    ) -> Result<(), NbError> {
        self.switch_ports.lock().unwrap().insert(
            port.to_string(),
            SwitchPortRecord::RouterAttachment {
                switch: switch.to_string(),
                router_port: router_port.to_string(),
                mac: mac.to_string(),
            },
        );
        Ok(())
    }

    async fn ensure_switch_port(
        &self,
        switch: &str,
        port: &str,
        addresses: &str,
    ) -> Result<(), NbError> {
        self.switch_ports.lock().unwrap().insert(
            port.to_string(),
            SwitchPortRecord::Host {
                switch: switch.to_string(),
                addresses: addresses.to_string(),
            },
        );
        Ok(())
    }

    async fn find_load_balancer(&self, tag: &str) -> Result<Option<String>, NbError> {
        self.lb_lookups.lock().unwrap().push(tag.to_string());
        Ok(self
            .load_balancers
            .lock()
            .unwrap()
            .iter()
            .find(|(_, t)| t.as_str() == tag)
            .map(|(uuid, _)| uuid.clone()))
    }

    async fn set_switch_load_balancer(&self, switch: &str, lb: &str) -> Result<(), NbError> {
        let mut switches = self.switches.lock().unwrap();
        let record = switches
            .get_mut(switch)
            .ok_or_else(|| NbError::NotFound(format!("logical switch {switch}")))?;
        record.load_balancers = vec![lb.to_string()];
        Ok(())
    }

    async fn add_switch_load_balancer(&self, switch: &str, lb: &str) -> Result<(), NbError> {
        let mut switches = self.switches.lock().unwrap();
        let record = switches
            .get_mut(switch)
            .ok_or_else(|| NbError::NotFound(format!("logical switch {switch}")))?;
        if !record.load_balancers.iter().any(|l| l == lb) {
            record.load_balancers.push(lb.to_string());
        }
        Ok(())
    }
}
