//! `ovn-nbctl` backed northbound database client

use crate::error::NbError;
use crate::nb_trait::NbClientTrait;
use tokio::process::Command;
use tracing::debug;

/// OVN northbound database client backed by the `ovn-nbctl` CLI
///
/// Each method maps to a single blocking `ovn-nbctl` invocation; there is no
/// connection state, so the client is cheap to construct and freely shared.
#[derive(Debug, Clone)]
pub struct NbctlClient {
    program: String,
}

impl NbctlClient {
    /// Create a new client invoking the given `ovn-nbctl` binary
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `ovn-nbctl` with the given arguments, returning trimmed stdout
    async fn run(&self, args: &[&str]) -> Result<String, NbError> {
        debug!(program = %self.program, ?args, "running ovn-nbctl");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|source| NbError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(NbError::Command {
                command: format!("{} {}", self.program, args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait::async_trait]
impl NbClientTrait for NbctlClient {
    async fn router_port_mac(&self, port: &str) -> Result<Option<String>, NbError> {
        let out = self
            .run(&["--if-exists", "get", "logical_router_port", port, "mac"])
            .await?;
        // String columns come back quoted; an absent record comes back empty.
        let mac = out.trim_matches('"').to_string();
        if mac.is_empty() { Ok(None) } else { Ok(Some(mac)) }
    }

    async fn cluster_router(&self) -> Result<String, NbError> {
        let out = self
            .run(&[
                "--data=bare",
                "--no-heading",
                "--columns=_uuid",
                "find",
                "logical_router",
                "external_ids:cluster-router=yes",
            ])
            .await?;
        if out.is_empty() {
            return Err(NbError::NotFound("cluster distributed router".to_string()));
        }
        Ok(out)
    }

    async fn create_router_port(
        &self,
        router: &str,
        port: &str,
        mac: &str,
        network: &str,
    ) -> Result<(), NbError> {
        self.run(&["--may-exist", "lrp-add", router, port, mac, network])
            .await?;
        Ok(())
    }

    async fn ensure_switch(
        &self,
        switch: &str,
        subnet: &str,
        gateway: &str,
    ) -> Result<(), NbError> {
        let subnet_arg = format!("other-config:subnet={subnet}");
        let gateway_arg = format!("external-ids:gateway_ip={gateway}");
        self.run(&[
            "--",
            "--may-exist",
            "ls-add",
            switch,
            "--",
            "set",
            "logical_switch",
            switch,
            &subnet_arg,
            &gateway_arg,
        ])
        .await?;
        Ok(())
    }

    async fn ensure_router_attachment(
        &self,
        switch: &str,
        port: &str,
        router_port: &str,
        mac: &str,
    ) -> Result<(), NbError> {
        let router_port_arg = format!("options:router-port={router_port}");
        // addresses is a set-typed column; the MAC must be quoted or the
        // database grammar tokenizes the unquoted value at the first ':'.
        let addresses_arg = format!("addresses=\"{mac}\"");
        self.run(&[
            "--",
            "--may-exist",
            "lsp-add",
            switch,
            port,
            "--",
            "set",
            "logical_switch_port",
            port,
            "type=router",
            &router_port_arg,
            &addresses_arg,
        ])
        .await?;
        Ok(())
    }

    async fn ensure_switch_port(
        &self,
        switch: &str,
        port: &str,
        addresses: &str,
    ) -> Result<(), NbError> {
        self.run(&[
            "--",
            "--may-exist",
            "lsp-add",
            switch,
            port,
            "--",
            "lsp-set-addresses",
            port,
            addresses,
        ])
        .await?;
        Ok(())
    }

    async fn find_load_balancer(&self, tag: &str) -> Result<Option<String>, NbError> {
        let predicate = format!("external_ids:{tag}=yes");
        let out = self
            .run(&[
                "--data=bare",
                "--no-heading",
                "--columns=_uuid",
                "find",
                "load_balancer",
                &predicate,
            ])
            .await?;
        if out.is_empty() { Ok(None) } else { Ok(Some(out)) }
    }

    async fn set_switch_load_balancer(&self, switch: &str, lb: &str) -> Result<(), NbError> {
        let assignment = format!("load_balancer={lb}");
        self.run(&["set", "logical_switch", switch, &assignment])
            .await?;
        Ok(())
    }

    async fn add_switch_load_balancer(&self, switch: &str, lb: &str) -> Result<(), NbError> {
        self.run(&["add", "logical_switch", switch, "load_balancer", lb])
            .await?;
        Ok(())
    }
}
