use super::*;

#[test]
fn test_insert_then_seal_single_key() {
    let mut t = BuildTrie::new(true, false);
    t.insert(b"cat", b"meow").unwrap();
    let sealed = t.seal().unwrap();
    assert_eq!(sealed.header().nodes_used, 5); // sentinel + root + c,a,t
}

#[test]
fn test_insert_rejects_newline_in_value() {
    let mut t = BuildTrie::new(true, false);
    let err = t.insert(b"cat", b"me\now").unwrap_err();
    assert!(matches!(err, crate::Error::InvalidValue(..)));
}

#[test]
fn test_newline_in_value_allowed_without_content() {
    let mut t = BuildTrie::new(false, false);
    t.insert(b"cat", b"me\now").unwrap();
}

#[test]
fn test_seal_consumes_builder_once() {
    let mut t = BuildTrie::new(false, false);
    t.insert(b"a", b"").unwrap();
    let sealed = t.seal().unwrap();
    assert_eq!(sealed.header().nodes_used, 3); // sentinel + root + a
}

#[test]
fn test_empty_key_targets_root() {
    let mut t = BuildTrie::new(true, false);
    t.insert(b"", b"rootval").unwrap();
    let sealed = t.seal().unwrap();
    assert_eq!(sealed.header().nodes_used, 2); // sentinel + root, no byte nodes
    assert_ne!(sealed.nodes[1].data, 0);
}

#[test]
fn test_repeated_insert_same_key_accumulates() {
    let mut t = BuildTrie::new(true, false);
    t.insert(b"dog", b"bark").unwrap();
    t.insert(b"dog", b"woof").unwrap();
    let sealed = t.seal().unwrap();
    let off = sealed.nodes.last().unwrap().data as usize;
    assert!(off != 0);
    let end = sealed.data[off..].iter().position(|&b| b == 0).unwrap();
    assert_eq!(&sealed.data[off..off + end], b"bark\nwoof");
}

#[test]
fn test_membership_only_sets_sentinel_data() {
    let mut t = BuildTrie::new(false, false);
    t.insert(b"x", b"ignored-without-with-content").unwrap();
    let sealed = t.seal().unwrap();
    assert_eq!(sealed.nodes.last().unwrap().data, 1);
}

#[test]
fn test_repeated_empty_value_inserts_still_separate() {
    let mut t = BuildTrie::new(true, false);
    t.insert(b"k", b"").unwrap();
    t.insert(b"k", b"").unwrap();
    let sealed = t.seal().unwrap();
    let off = sealed.nodes.last().unwrap().data as usize;
    let end = sealed.data[off..].iter().position(|&b| b == 0).unwrap();
    assert_eq!(&sealed.data[off..off + end], b"\n");
}

#[test]
fn test_empty_value_then_nonempty_value_separates() {
    let mut t = BuildTrie::new(true, false);
    t.insert(b"k", b"").unwrap();
    t.insert(b"k", b"abc").unwrap();
    let sealed = t.seal().unwrap();
    let off = sealed.nodes.last().unwrap().data as usize;
    let end = sealed.data[off..].iter().position(|&b| b == 0).unwrap();
    assert_eq!(&sealed.data[off..off + end], b"\nabc");
}

#[test]
fn test_shared_prefix_reuses_nodes() {
    let mut t = BuildTrie::new(true, false);
    t.insert(b"car", b"1").unwrap();
    t.insert(b"cart", b"2").unwrap();
    let sealed = t.seal().unwrap();
    // sentinel, root, c, a, r, t = 6 nodes
    assert_eq!(sealed.header().nodes_used, 6);
}
