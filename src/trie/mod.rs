//! A persistent, read-optimized byte-key -> string-value trie: an
//! in-memory build representation, a seal/consolidate compaction step,
//! a fixed binary on-disk layout, and a memory-mapped reader.
//!
//! See [`build::BuildTrie`] for construction, [`seal::SealedTrie`] for
//! the sealed/serializable form, and [`reader::ReaderTrie`] for queries
//! against a serialized file.

pub mod build;
pub mod compress;
pub mod consolidate;
pub mod format;
pub mod reader;
pub mod seal;
pub mod serialize;

pub use build::BuildTrie;
pub use reader::{LookupResult, ReaderTrie};
pub use seal::SealedTrie;
