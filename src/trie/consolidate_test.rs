use super::*;

fn node_with(data: u32) -> SealedNode {
    SealedNode { first_chunk: 0, data, num_chunks: 0 }
}

#[test]
fn test_no_data_nodes_keep_zero_offset() {
    let values: Arena<Vec<u8>> = Arena::new();
    let mut nodes = vec![node_with(0), node_with(0)];
    let data = consolidate(&values, &mut nodes).unwrap();
    assert_eq!(data, vec![0u8]);
    assert_eq!(nodes[0].data, 0);
    assert_eq!(nodes[1].data, 0);
}

#[test]
fn test_identical_values_deduplicated() {
    let mut values: Arena<Vec<u8>> = Arena::new();
    let a = values.alloc(b"hello".to_vec()).unwrap();
    let b = values.alloc(b"hello".to_vec()).unwrap();
    let mut nodes = vec![node_with(a), node_with(b)];

    let data = consolidate(&values, &mut nodes).unwrap();

    assert_eq!(nodes[0].data, nodes[1].data);
    assert_ne!(nodes[0].data, 0);
    let off = nodes[0].data as usize;
    assert_eq!(&data[off..off + 5], b"hello");
    assert_eq!(data[off + 5], 0);
    // only one copy stored
    assert_eq!(data.len(), 1 + 5 + 1);
}

#[test]
fn test_empty_value_still_gets_real_offset() {
    let mut values: Arena<Vec<u8>> = Arena::new();
    let id = values.alloc(Vec::new()).unwrap();
    let mut nodes = vec![node_with(id)];

    let data = consolidate(&values, &mut nodes).unwrap();

    assert_ne!(nodes[0].data, 0, "a node that was assigned a value arena id must get a real offset even if the value is empty");
    let off = nodes[0].data as usize;
    assert_eq!(data[off], 0);
}

#[test]
fn test_distinct_values_get_distinct_offsets() {
    let mut values: Arena<Vec<u8>> = Arena::new();
    let a = values.alloc(b"foo".to_vec()).unwrap();
    let b = values.alloc(b"bar".to_vec()).unwrap();
    let mut nodes = vec![node_with(a), node_with(b)];

    consolidate(&values, &mut nodes).unwrap();

    assert_ne!(nodes[0].data, nodes[1].data);
}
