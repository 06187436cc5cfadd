//! Fixed, explicitly-laid-out on-disk records.
//!
//! The persisted layout is defined purely by these encode/decode
//! functions over little-endian byte slices — never by blitting a
//! native Rust struct, which could carry padding or (in the source this
//! spec was distilled from) live pointers. See `§4.5`/`§9` of
//! `SPEC_FULL.md`.

use byteorder::{ByteOrder, LittleEndian};

use crate::{err_at, Result};

/// Current on-disk layout version. A reader rejects any other value.
pub const VERSION: u8 = 1;

pub const HEADER_LEN: usize = 16;
pub const NODE_REC_LEN: usize = 9;
pub const CHUNK_REC_LEN: usize = 5;

/// The fixed header record. Transient build-only state (the arenas
/// themselves) never appears here — only what a reader needs to bind
/// the three regions that follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub version: u8,
    pub with_content: bool,
    pub use_compress: bool,
    pub nodes_used: u32,
    pub chunks_used: u32,
    pub data_used: u32,
}

impl Header {
    pub fn to_bytes(self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0] = self.version;
        buf[1] = self.with_content as u8;
        buf[2] = self.use_compress as u8;
        buf[3] = 0; // padding, reserved
        LittleEndian::write_u32(&mut buf[4..8], self.nodes_used);
        LittleEndian::write_u32(&mut buf[8..12], self.chunks_used);
        LittleEndian::write_u32(&mut buf[12..16], self.data_used);
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Header> {
        if buf.len() < HEADER_LEN {
            return err_at!(MalformedFile, msg: "header truncated: {} bytes", buf.len());
        }
        let version = buf[0];
        if version != VERSION {
            return err_at!(BadVersion, msg: "file version {} unsupported (want {})", version, VERSION);
        }
        Ok(Header {
            version,
            with_content: buf[1] != 0,
            use_compress: buf[2] != 0,
            nodes_used: LittleEndian::read_u32(&buf[4..8]),
            chunks_used: LittleEndian::read_u32(&buf[8..12]),
            data_used: LittleEndian::read_u32(&buf[12..16]),
        })
    }
}

/// A sealed node record, as it appears in the nodes region of the file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SealedNode {
    pub first_chunk: u32,
    pub data: u32,
    pub num_chunks: u8,
}

impl SealedNode {
    pub fn to_bytes(self) -> [u8; NODE_REC_LEN] {
        let mut buf = [0u8; NODE_REC_LEN];
        LittleEndian::write_u32(&mut buf[0..4], self.first_chunk);
        LittleEndian::write_u32(&mut buf[4..8], self.data);
        buf[8] = self.num_chunks;
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> SealedNode {
        SealedNode {
            first_chunk: LittleEndian::read_u32(&buf[0..4]),
            data: LittleEndian::read_u32(&buf[4..8]),
            num_chunks: buf[8],
        }
    }
}

/// A sealed child-chunk record: `(key, target)` packed contiguously.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SealedChunk {
    pub key: u8,
    pub target: u32,
}

impl SealedChunk {
    pub fn to_bytes(self) -> [u8; CHUNK_REC_LEN] {
        let mut buf = [0u8; CHUNK_REC_LEN];
        LittleEndian::write_u32(&mut buf[0..4], self.target);
        buf[4] = self.key;
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> SealedChunk {
        SealedChunk {
            target: LittleEndian::read_u32(&buf[0..4]),
            key: buf[4],
        }
    }
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
