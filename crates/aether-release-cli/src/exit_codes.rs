//! Exit codes for the `aether-release` binary.
//! These are part of the public contract; CI scripts branch on them.

use aether_release::{ConfigError, PackageError};

pub const SUCCESS: i32 = 0;
pub const PACKAGE_FAILED: i32 = 1; // Filesystem or archive write failed
pub const CONFIG_ERROR: i32 = 2; // Bad config file, manifest or flag value

/// Map an error bubbled up from a command to an exit code.
pub fn for_error(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<PackageError>() {
        return e.exit_code();
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }
    PACKAGE_FAILED
}
