//! Global value-blob deduplication into one contiguous data region.
//!
//! Grounded on `create_strings`/`strings_deduplicate`/`trie_consolidate`
//! in `original_source/src/trie.c`.

use crate::{arena::Arena, trie::format::SealedNode, Result};

/// Replace every sealed node's `data` (currently a build-time value-arena
/// id) with its final byte offset into the returned data region. Offset
/// `0` continues to mean "no value"; offset `1` is where the first
/// NUL-terminated blob begins.
///
/// A node that never had a value inserted keeps `data == 0` and never
/// appears here. A node that did get a value — even one that collapsed
/// to the empty string — is still given a real offset, pointing at a
/// lone `"\0"` blob; only the former counts as "no data".
pub(crate) fn consolidate(values: &Arena<Vec<u8>>, nodes: &mut [SealedNode]) -> Result<Vec<u8>> {
    let mut owners: Vec<(usize, &[u8])> = nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.data != 0)
        .map(|(idx, node)| (idx, values.get(node.data).as_slice()))
        .collect();

    let mut unique: Vec<&[u8]> = owners.iter().map(|(_, buf)| *buf).collect();
    unique.sort_unstable();
    unique.dedup();

    let mut offsets = Vec::with_capacity(unique.len());
    let mut data = vec![0u8]; // offset 0 reserved for "no value"
    for s in &unique {
        offsets.push(data.len() as u32);
        data.extend_from_slice(s);
        data.push(0);
    }

    for (idx, buf) in owners.drain(..) {
        let pos = unique.binary_search(&buf).expect("owner content must be in its own unique set");
        nodes[idx].data = offsets[pos];
    }

    Ok(data)
}

#[cfg(test)]
#[path = "consolidate_test.rs"]
mod consolidate_test;
