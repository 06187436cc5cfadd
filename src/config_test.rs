use super::*;

#[test]
fn test_default_is_content_no_compress() {
    let c = BuildConfig::default();
    assert!(c.with_content);
    assert!(!c.use_compress);
}

#[test]
fn test_new_sets_both_fields() {
    let c = BuildConfig::new(false, true);
    assert!(!c.with_content);
    assert!(c.use_compress);
}
