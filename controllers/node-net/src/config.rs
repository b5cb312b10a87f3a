//! Controller configuration
//!
//! An optional YAML file (path in `NODE_NET_CONFIG`) supplies defaults;
//! individual values can be overridden through environment variables. With
//! neither present the built-in defaults are used.

use serde::Deserialize;
use std::env;
use std::fs;

/// Default interface MTU, sized to leave room for the overlay encapsulation
/// header on a standard 1500-byte underlay.
const DEFAULT_MTU: u32 = 1400;

/// Node network controller configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// MTU requested on the management interface
    pub mtu: u32,
    /// `ovn-nbctl` binary name or path
    pub nbctl: String,
    /// `ovs-vsctl` binary name or path
    pub vsctl: String,
    /// `ip` binary name or path
    pub ip: String,
    /// Integration bridge shared by all node interfaces
    pub bridge: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mtu: DEFAULT_MTU,
            nbctl: "ovn-nbctl".to_string(),
            vsctl: "ovs-vsctl".to_string(),
            ip: "ip".to_string(),
            bridge: "br-int".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the `NODE_NET_CONFIG` YAML file if set,
    /// then apply environment variable overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match env::var("NODE_NET_CONFIG") {
            Ok(path) => {
                let raw = fs::read_to_string(&path)?;
                serde_yaml::from_str(&raw)?
            }
            Err(_) => Self::default(),
        };

        config.apply_env_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Apply per-field overrides from an environment-variable lookup.
    /// Takes the lookup as a closure so tests can inject variables without
    /// mutating the process environment.
    fn apply_env_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(mtu) = var("NODE_NET_MTU") {
            self.mtu = mtu.parse()?;
        }
        if let Some(nbctl) = var("NODE_NET_NBCTL") {
            self.nbctl = nbctl;
        }
        if let Some(vsctl) = var("NODE_NET_VSCTL") {
            self.vsctl = vsctl;
        }
        if let Some(ip) = var("NODE_NET_IP") {
            self.ip = ip;
        }
        if let Some(bridge) = var("NODE_NET_BRIDGE") {
            self.bridge = bridge;
        }
        Ok(())
    }
}
