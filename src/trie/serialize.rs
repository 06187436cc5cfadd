//! Streaming binary writer for a [`SealedTrie`].
//!
//! Grounded on `trie_serialize` in `original_source/src/trie.c` for
//! region order, and on the teacher's flush-on-threshold buffered-writer
//! idiom in `prataprc-rdms/src/robt/flush.rs`.

use std::{ffi::OsStr, io::BufWriter};

use crate::{trie::seal::SealedTrie, util, Result};

impl SealedTrie {
    /// Write this sealed trie to `path` as header, nodes, chunks, then
    /// (if `with_content`) the data region — each record explicitly
    /// little-endian encoded, streamed through a buffered writer rather
    /// than staged in one big `Vec<u8>`.
    pub fn serialize(&self, path: &OsStr) -> Result<()> {
        let file = util::create_file_w(path)?;
        let mut w = BufWriter::new(file);

        util::write_all(&mut w, &self.header().to_bytes())?;
        for node in &self.nodes {
            util::write_all(&mut w, &node.to_bytes())?;
        }
        for chunk in &self.chunks {
            util::write_all(&mut w, &chunk.to_bytes())?;
        }
        if self.with_content {
            util::write_all(&mut w, &self.data)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "serialize_test.rs"]
mod serialize_test;
