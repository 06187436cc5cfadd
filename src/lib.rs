//! A persistent, read-optimized index mapping byte-string keys to one or
//! more string values.
//!
//! A corpus is built once, incrementally, in memory (`trie::BuildTrie`),
//! then sealed and serialized to a single file. Thereafter the file is
//! opened read-only via a memory mapping (`trie::ReaderTrie`) and queried
//! with point lookups that never allocate unless value compression is
//! enabled. The two binaries in `src/bin/` (`compile`, `query`) are thin
//! shells around this library.

pub mod arena;
pub mod config;
pub mod error;
pub mod trie;
pub mod util;

pub use crate::{
    config::BuildConfig,
    error::{last_error, Error, Result},
    trie::{BuildTrie, LookupResult, ReaderTrie, SealedTrie},
};
