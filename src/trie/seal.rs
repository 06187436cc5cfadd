//! Seal: reshape per-node child lists into a sorted contiguous array.
//!
//! Grounded on `reorder_chunks`/`squash_list`/`trie_serialize` in
//! `original_source/src/trie.c`.

use log::trace;

use crate::{
    err_at,
    trie::{
        build::BuildTrie,
        consolidate,
        format::{Header, SealedChunk, SealedNode},
    },
    Result,
};

/// The reshaped, pointer-free form of a trie, ready to be written to
/// disk by [`SealedTrie::serialize`].
pub struct SealedTrie {
    pub(crate) with_content: bool,
    pub(crate) use_compress: bool,
    pub(crate) nodes: Vec<SealedNode>,
    pub(crate) chunks: Vec<SealedChunk>,
    pub(crate) data: Vec<u8>,
}

impl SealedTrie {
    pub fn header(&self) -> Header {
        Header {
            version: crate::trie::format::VERSION,
            with_content: self.with_content,
            use_compress: self.use_compress,
            nodes_used: self.nodes.len() as u32,
            chunks_used: self.chunks.len() as u32,
            data_used: self.data.len() as u32,
        }
    }
}

pub(crate) fn seal(build: BuildTrie) -> Result<SealedTrie> {
    let BuildTrie {
        with_content,
        use_compress,
        nodes,
        chunks,
        values,
        ..
    } = build;

    // Sentinel chunk 0: never addressed by a valid `first_chunk`, but
    // occupies a slot so real chunk ids stay 1-based.
    let mut sealed_chunks = vec![SealedChunk::default()];
    let mut sealed_nodes: Vec<SealedNode> = Vec::with_capacity(nodes.len() as usize);

    for (_id, node) in nodes.iter() {
        let mut draft = SealedNode { first_chunk: 0, data: node.data, num_chunks: 0 };

        if node.first_chunk != 0 {
            let start = sealed_chunks.len();
            let mut chunk_id = node.first_chunk;
            while chunk_id != 0 {
                let c = *chunks.get(chunk_id);
                sealed_chunks.push(SealedChunk { key: c.key, target: c.target });
                chunk_id = c.next;
            }
            sealed_chunks[start..].sort_by_key(|c| c.key);

            let count = sealed_chunks.len() - start;
            if count > u8::MAX as usize {
                return err_at!(
                    OutOfMemory,
                    msg: "node has {} distinct children, more than 255 fit in num_chunks",
                    count
                );
            }
            draft.first_chunk = start as u32;
            draft.num_chunks = count as u8;
        }

        sealed_nodes.push(draft);
    }

    let data = if with_content {
        consolidate::consolidate(&values, &mut sealed_nodes)?
    } else {
        Vec::new()
    };

    trace!(
        "sealed trie: {} nodes, {} chunks, {} data bytes",
        sealed_nodes.len(),
        sealed_chunks.len(),
        data.len()
    );

    Ok(SealedTrie { with_content, use_compress, nodes: sealed_nodes, chunks: sealed_chunks, data })
}

#[cfg(test)]
#[path = "seal_test.rs"]
mod seal_test;
