//! In-memory build representation and incremental insertion.
//!
//! Grounded on `find_or_create_node`/`trie_insert`/`insert_data` in
//! `original_source/src/trie.c`, re-expressed over the index-addressed
//! [`crate::arena::Arena`] pools instead of C linked lists of pointers.

use log::trace;

use crate::{
    arena::{Arena, ChunkId, DataId, NodeId},
    config::BuildConfig,
    err_at,
    trie::{compress, seal::SealedTrie},
    Result,
};

pub(crate) const ROOT: NodeId = 1;

#[derive(Clone, Copy, Default)]
pub(crate) struct BuildNode {
    pub first_chunk: ChunkId,
    pub data: DataId,
}

#[derive(Clone, Copy, Default)]
pub(crate) struct BuildChunk {
    pub next: ChunkId,
    pub target: NodeId,
    pub key: u8,
}

/// A trie under construction. Created empty via [`BuildTrie::new`],
/// grown with [`BuildTrie::insert`], and consumed once by
/// [`BuildTrie::seal`] to produce a [`crate::trie::SealedTrie`] ready
/// for [`crate::trie::SealedTrie::serialize`].
pub struct BuildTrie {
    pub(crate) with_content: bool,
    pub(crate) use_compress: bool,
    pub(crate) nodes: Arena<BuildNode>,
    pub(crate) chunks: Arena<BuildChunk>,
    pub(crate) values: Arena<Vec<u8>>,
}

impl BuildTrie {
    /// `with_content = false` builds a membership-only (value-less) index.
    /// `use_compress = true` stores each value as a key-relative prefix
    /// compression of itself; only meaningful when `with_content` is set.
    pub fn new(with_content: bool, use_compress: bool) -> Self {
        let mut nodes = Arena::new();
        nodes.alloc(BuildNode::default()).expect("root fits in a fresh arena");
        let chunks = Arena::new();
        let values = Arena::new();

        BuildTrie { with_content, use_compress, nodes, chunks, values }
    }

    /// Equivalent to [`BuildTrie::new`], reading its two flags out of a
    /// [`BuildConfig`] instead of positional booleans.
    pub fn from_config(config: BuildConfig) -> Self {
        Self::new(config.with_content, config.use_compress)
    }

    /// Insert `value` under `key`. Repeated inserts under the same key
    /// accumulate: a later `lookup` sees every inserted value, in
    /// insertion order, separated by `'\n'`.
    ///
    /// The empty key is valid and targets the root node directly.
    pub fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        if self.with_content && value.contains(&b'\n') {
            return err_at!(InvalidValue, msg: "value contains forbidden '\\n' byte");
        }

        let mut current = ROOT;
        for &c in key {
            current = self.find_or_create_child(current, c)?;
        }
        self.accumulate(current, key, value)
    }

    fn find_or_create_child(&mut self, current: NodeId, key: u8) -> Result<NodeId> {
        let mut last: ChunkId = 0;
        let mut chunk_id = self.nodes.get(current).first_chunk;
        while chunk_id != 0 {
            let chunk = *self.chunks.get(chunk_id);
            if chunk.key == key {
                return Ok(chunk.target);
            }
            last = chunk_id;
            chunk_id = chunk.next;
        }

        let target = self.nodes.alloc(BuildNode::default())?;
        let fresh = self.chunks.alloc(BuildChunk { next: 0, target, key })?;
        if last != 0 {
            self.chunks.get_mut(last).next = fresh;
        } else {
            self.nodes.get_mut(current).first_chunk = fresh;
        }
        Ok(target)
    }

    fn accumulate(&mut self, node: NodeId, key: &[u8], value: &[u8]) -> Result<()> {
        if !self.with_content {
            self.nodes.get_mut(node).data = 1;
            return Ok(());
        }

        let piece = if self.use_compress {
            compress::compress(key, value)
        } else {
            value.to_vec()
        };

        let had_value = self.nodes.get(node).data != 0;
        let data_id = self.nodes.get(node).data;
        let data_id = if data_id == 0 {
            let id = self.values.alloc(Vec::with_capacity(256))?;
            self.nodes.get_mut(node).data = id;
            id
        } else {
            data_id
        };

        // `had_value` (not `buf.is_empty()`) decides the separator: an
        // empty-string value still counts as a prior insert, so two
        // inserted empty values must still separate with one '\n'.
        let buf = self.values.get_mut(data_id);
        if had_value {
            buf.push(b'\n');
        }
        buf.extend_from_slice(&piece);
        Ok(())
    }

    /// Reshape the build arenas into a sealed, contiguous, pointer-free
    /// form ready for serialization. Consumes `self`: the borrow checker
    /// makes sealing (or inserting into) the same builder twice a
    /// compile error, not a runtime one.
    pub fn seal(self) -> Result<SealedTrie> {
        trace!(
            "sealing trie: {} nodes, {} build-chunks",
            self.nodes.len(),
            self.chunks.len()
        );
        crate::trie::seal::seal(self)
    }
}

#[cfg(test)]
#[path = "build_test.rs"]
mod build_test;
