//! Memory-mapped, read-only trie and binary-search lookup.
//!
//! Grounded on `trie_load`/`trie_lookup` in `original_source/src/trie.c`
//! for the algorithm, and on `prataprc-rdms/src/robt.rs`'s direct use of
//! a mapped file as the runtime image for the binding/bounds-checking
//! idiom.

use std::ffi::OsStr;

use memmap2::Mmap;

use crate::{
    err_at,
    trie::{
        build::ROOT,
        compress,
        format::{Header, SealedChunk, SealedNode, CHUNK_REC_LEN, HEADER_LEN, NODE_REC_LEN},
    },
    Result,
};

/// The result of a successful [`ReaderTrie::lookup`]. Borrowed when the
/// value can be read straight out of the mapping; owned when
/// decompression had to reconstruct it. Dropping either variant is the
/// entire "release" contract — there is nothing else to free.
pub enum LookupResult<'a> {
    /// Value-less index: the key is present, no bytes are associated.
    Found,
    /// A view directly into the mapped data region.
    Borrowed(&'a [u8]),
    /// A freshly reconstructed buffer (decompression was required).
    Owned(Vec<u8>),
}

impl<'a> LookupResult<'a> {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            LookupResult::Found => b"Found",
            LookupResult::Borrowed(b) => b,
            LookupResult::Owned(b) => b,
        }
    }
}

/// A trie opened for read-only query against a serialized file. Owns the
/// memory mapping for its whole lifetime; unmapped on `Drop`.
#[derive(Debug)]
pub struct ReaderTrie {
    mmap: Mmap,
    header: Header,
    nodes_base: usize,
    chunks_base: usize,
    data_base: usize,
}

impl ReaderTrie {
    pub fn open(path: &OsStr) -> Result<ReaderTrie> {
        let file = crate::util::open_file_r(path)?;
        let meta = err_at!(IoStat, file.metadata(), "stat {:?}", path)?;
        let len = meta.len() as usize;

        let mmap = err_at!(IoMap, unsafe { Mmap::map(&file) }, "mmap {:?}", path)?;

        if len < HEADER_LEN {
            return err_at!(MalformedFile, msg: "file of {} bytes too short for header", len);
        }
        let header = Header::from_bytes(&mmap[..HEADER_LEN])?;

        let nodes_base = HEADER_LEN;
        let nodes_len = header.nodes_used as usize * NODE_REC_LEN;
        let chunks_base = nodes_base + nodes_len;
        let chunks_len = header.chunks_used as usize * CHUNK_REC_LEN;
        let data_base = chunks_base + chunks_len;
        let data_len = if header.with_content { header.data_used as usize } else { 0 };

        if !header.with_content && header.data_used != 0 {
            return err_at!(MalformedFile, msg: "data_used {} present without with_content", header.data_used);
        }
        if data_base + data_len > len {
            return err_at!(
                MalformedFile,
                msg: "regions extend to {} bytes, file is {} bytes",
                data_base + data_len,
                len
            );
        }

        Ok(ReaderTrie { mmap, header, nodes_base, chunks_base, data_base })
    }

    /// `None` if `id` is outside the bound nodes region — a structurally
    /// corrupted file, not merely a file too short to open.
    fn node(&self, id: u32) -> Option<SealedNode> {
        if id >= self.header.nodes_used {
            return None;
        }
        let off = self.nodes_base + id as usize * NODE_REC_LEN;
        Some(SealedNode::from_bytes(&self.mmap[off..off + NODE_REC_LEN]))
    }

    fn chunk(&self, id: u32) -> Option<SealedChunk> {
        if id >= self.header.chunks_used {
            return None;
        }
        let off = self.chunks_base + id as usize * CHUNK_REC_LEN;
        Some(SealedChunk::from_bytes(&self.mmap[off..off + CHUNK_REC_LEN]))
    }

    fn child(&self, node: SealedNode, key: u8) -> Option<u32> {
        let start = node.first_chunk as usize;
        let end = start.checked_add(node.num_chunks as usize)?;
        if end > self.header.chunks_used as usize {
            return None;
        }
        let mut lo = start;
        let mut hi = end;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let c = self.chunk(mid as u32)?;
            match c.key.cmp(&key) {
                std::cmp::Ordering::Equal => return Some(c.target),
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid,
            }
        }
        None
    }

    /// Walk `key` from the root, returning `None` if absent or if the
    /// mapped file turns out to be structurally inconsistent partway
    /// through the walk. Never panics, never fails.
    pub fn lookup(&self, key: &[u8]) -> Option<LookupResult<'_>> {
        let mut current = ROOT;
        for &c in key {
            let node = self.node(current)?;
            current = self.child(node, c)?;
        }

        let node = self.node(current)?;
        if node.data == 0 {
            return None;
        }
        if !self.header.with_content {
            return Some(LookupResult::Found);
        }

        let data_len = self.header.data_used as usize;
        let offset = node.data as usize;
        if offset >= data_len {
            return None;
        }
        let start = self.data_base + offset;
        let region_end = self.data_base + data_len;
        let end = self.mmap[start..region_end].iter().position(|&b| b == 0).map(|n| start + n)?;
        let blob = &self.mmap[start..end];

        if !self.header.use_compress {
            return Some(LookupResult::Borrowed(blob));
        }

        let mut out = Vec::with_capacity(blob.len());
        for (i, piece) in blob.split(|&b| b == b'\n').enumerate() {
            if i > 0 {
                out.push(b'\n');
            }
            out.extend_from_slice(&compress::decompress_piece(key, piece)?);
        }
        Some(LookupResult::Owned(out))
    }
}

#[cfg(test)]
#[path = "reader_test.rs"]
mod reader_test;
