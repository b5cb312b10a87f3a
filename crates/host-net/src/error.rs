//! Host networking client errors

use thiserror::Error;

/// Errors that can occur when configuring host kernel networking
#[derive(Debug, Error)]
pub enum HostNetError {
    /// `ip` exited non-zero; carries the combined diagnostic output
    #[error("ip command failed: {command}: {output}")]
    Command {
        /// The full command line that failed
        command: String,
        /// Combined stdout/stderr of the failed invocation
        output: String,
    },

    /// The `ip` binary could not be spawned at all
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// Program name or path that failed to start
        program: String,
        /// Underlying OS error
        source: std::io::Error,
    },
}
