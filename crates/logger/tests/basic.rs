//! Integration tests for level handling in the `logger` crate

use logger::{debug, error, info, warn};
use logger::{level, set_level_from_str, Level};

#[test]
fn set_level_from_str_applies_known_names() {
    assert!(set_level_from_str("warning"));
    assert_eq!(level(), Level::Warn);
    assert!(set_level_from_str("DEBUG"));
    assert_eq!(level(), Level::Debug);
}

#[test]
fn set_level_from_str_rejects_unknown_names() {
    assert!(!set_level_from_str("trace"));
    assert!(!set_level_from_str(""));
}

#[test]
fn macros_accept_format_arguments() {
    info!("rendered {} markers", 3);
    warn!("family {} has no layout entry", "@F1@");
    error!("failed to write {}", "/tmp/out.html");
    debug!("skipped group {:?}", "g@F9@");
}

#[cfg(feature = "log-debug")]
#[test]
fn debug_switch_round_trips() {
    use logger::{disable_debug, enable_debug, is_debug_enabled};
    disable_debug();
    assert!(!is_debug_enabled());
    enable_debug();
    assert!(is_debug_enabled());
}
