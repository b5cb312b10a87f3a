//! Open vSwitch client errors

use thiserror::Error;

/// Errors that can occur when interacting with the virtual switch
#[derive(Debug, Error)]
pub enum OvsError {
    /// `ovs-vsctl` exited non-zero
    #[error("ovs-vsctl command failed: {command}: {stderr}")]
    Command {
        /// The full command line that failed
        command: String,
        /// Captured stderr of the failed invocation
        stderr: String,
    },

    /// The `ovs-vsctl` binary could not be spawned at all
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// Program name or path that failed to start
        program: String,
        /// Underlying OS error
        source: std::io::Error,
    },
}
