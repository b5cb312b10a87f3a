//! `ovs-vsctl` backed virtual switch client

use crate::error::OvsError;
use crate::ovs_trait::OvsClientTrait;
use tokio::process::Command;
use tracing::debug;

const ZERO_MAC: &str = "00:00:00:00:00:00";

/// Virtual switch client backed by the `ovs-vsctl` CLI
#[derive(Debug, Clone)]
pub struct VsctlClient {
    program: String,
}

impl VsctlClient {
    /// Create a new client invoking the given `ovs-vsctl` binary
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `ovs-vsctl` with the given arguments, returning trimmed stdout
    async fn run(&self, args: &[&str]) -> Result<String, OvsError> {
        debug!(program = %self.program, ?args, "running ovs-vsctl");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|source| OvsError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OvsError::Command {
                command: format!("{} {}", self.program, args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait::async_trait]
impl OvsClientTrait for VsctlClient {
    async fn ensure_bridge(&self, bridge: &str) -> Result<(), OvsError> {
        self.run(&["--", "--may-exist", "add-br", bridge]).await?;
        Ok(())
    }

    async fn ensure_internal_port(
        &self,
        bridge: &str,
        port: &str,
        mtu: u32,
        iface_id: &str,
    ) -> Result<(), OvsError> {
        let mtu_arg = format!("mtu_request={mtu}");
        let iface_id_arg = format!("external-ids:iface-id={iface_id}");
        self.run(&[
            "--",
            "--may-exist",
            "add-port",
            bridge,
            port,
            "--",
            "set",
            "interface",
            port,
            "type=internal",
            &mtu_arg,
            &iface_id_arg,
        ])
        .await?;
        Ok(())
    }

    async fn interface_mac(&self, port: &str) -> Result<Option<String>, OvsError> {
        let out = self
            .run(&["--if-exists", "get", "interface", port, "mac_in_use"])
            .await?;
        let mac = out.trim_matches(|c| c == '"' || c == '[' || c == ']').to_string();
        if mac.is_empty() || mac == ZERO_MAC {
            Ok(None)
        } else {
            Ok(Some(mac))
        }
    }
}
