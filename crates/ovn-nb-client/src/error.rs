//! OVN northbound client errors

use thiserror::Error;

/// Errors that can occur when interacting with the OVN northbound database
#[derive(Debug, Error)]
pub enum NbError {
    /// `ovn-nbctl` exited non-zero; carries the failing command line and
    /// its captured stderr so the failure can be diagnosed without a re-run
    #[error("ovn-nbctl command failed: {command}: {stderr}")]
    Command {
        /// The full command line that failed
        command: String,
        /// Captured stderr of the failed invocation
        stderr: String,
    },

    /// The `ovn-nbctl` binary could not be spawned at all
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// Program name or path that failed to start
        program: String,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// A record that was expected to exist in the northbound database is missing
    #[error("not found: {0}")]
    NotFound(String),
}
