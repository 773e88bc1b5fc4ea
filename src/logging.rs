// ============================================================================
// Logging
// Optional fmt subscriber for binaries and tests
// ============================================================================

use tracing::Level;

/// Install a global fmt subscriber at `DEBUG`.
///
/// Returns `false` when a global subscriber is already installed.
pub fn init() -> bool {
    init_with_level(Level::DEBUG)
}

/// Install a global fmt subscriber filtering at `level`.
///
/// Returns `false` when a global subscriber is already installed.
pub fn init_with_level(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let _ = init_with_level(Level::TRACE);
        assert!(!init());
    }
}
