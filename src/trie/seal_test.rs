use super::*;

#[test]
fn test_seal_sorts_children_by_key() {
    let mut t = BuildTrie::new(true, false);
    t.insert(b"c", b"1").unwrap();
    t.insert(b"a", b"2").unwrap();
    t.insert(b"b", b"3").unwrap();
    let sealed = t.seal().unwrap();

    let root = sealed.nodes[1];
    let children = &sealed.chunks[root.first_chunk as usize..root.first_chunk as usize + root.num_chunks as usize];
    let keys: Vec<u8> = children.iter().map(|c| c.key).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_seal_chunk_zero_is_sentinel() {
    let t = BuildTrie::new(true, false);
    let sealed = t.seal().unwrap();
    assert_eq!(sealed.chunks[0], crate::trie::format::SealedChunk::default());
}

#[test]
fn test_seal_without_content_skips_consolidation() {
    let mut t = BuildTrie::new(false, false);
    t.insert(b"a", b"").unwrap();
    let sealed = t.seal().unwrap();
    assert!(sealed.data.is_empty());
}

#[test]
fn test_header_reflects_region_sizes() {
    let mut t = BuildTrie::new(true, false);
    t.insert(b"ab", b"v").unwrap();
    let sealed = t.seal().unwrap();
    let h = sealed.header();
    assert_eq!(h.nodes_used as usize, sealed.nodes.len());
    assert_eq!(h.chunks_used as usize, sealed.chunks.len());
    assert_eq!(h.data_used as usize, sealed.data.len());
}
