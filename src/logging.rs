// ============================================================================
// Logging
// Subscriber bootstrap for binaries and tests (feature "logging")
// ============================================================================

use tracing::Level;

/// Install a `fmt` subscriber at `DEBUG` level.
///
/// Returns `false` if a global subscriber was already set.
pub fn init() -> bool {
    init_with_level(Level::DEBUG)
}

/// Install a `fmt` subscriber that records events up to `level`.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_with_level(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_with_level(Level::TRACE);
        assert!(!init());
    }
}
