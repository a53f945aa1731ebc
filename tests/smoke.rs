//! Integration smoke tests for `family_tree_page`

use family_tree_page::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
