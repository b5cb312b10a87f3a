//! iproute2 backed host networking client

use crate::error::HostNetError;
use crate::host_trait::HostNetTrait;
use tokio::process::Command;
use tracing::debug;

/// Host networking client backed by the `ip` command
#[derive(Debug, Clone)]
pub struct IpClient {
    program: String,
}

impl IpClient {
    /// Create a new client invoking the given `ip` binary
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `ip` with the given arguments, keeping combined output only for
    /// the failure path
    async fn run(&self, args: &[&str]) -> Result<(), HostNetError> {
        debug!(program = %self.program, ?args, "running ip");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|source| HostNetError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                if !combined.is_empty() {
                    combined.push('\n');
                }
                combined.push_str(stderr.trim());
            }
            return Err(HostNetError::Command {
                command: format!("{} {}", self.program, args.join(" ")),
                output: combined,
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl HostNetTrait for IpClient {
    async fn link_set_up(&self, dev: &str) -> Result<(), HostNetError> {
        self.run(&["link", "set", dev, "up"]).await
    }

    async fn addr_flush(&self, dev: &str) -> Result<(), HostNetError> {
        self.run(&["addr", "flush", "dev", dev]).await
    }

    async fn addr_add(&self, dev: &str, cidr: &str) -> Result<(), HostNetError> {
        self.run(&["addr", "add", cidr, "dev", dev]).await
    }

    async fn route_flush(&self, subnet: &str) -> Result<(), HostNetError> {
        self.run(&["route", "flush", subnet]).await
    }

    async fn route_add(&self, subnet: &str, via: &str) -> Result<(), HostNetError> {
        self.run(&["route", "add", subnet, "via", via]).await
    }
}
