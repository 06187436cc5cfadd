//! Build-time configuration, grounded on `prataprc-rdms/src/robt/config.rs`'s
//! `Config` struct, which collects the build-time knobs of the `robt`
//! B+Tree instead of threading them through every constructor.

/// Knobs that shape a [`crate::trie::BuildTrie`] at construction time.
#[derive(Clone, Copy, Debug)]
pub struct BuildConfig {
    /// Store and return values, or only membership.
    pub with_content: bool,
    /// Store each value as a key-relative prefix compression of itself.
    /// Only meaningful when `with_content` is set.
    pub use_compress: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig { with_content: true, use_compress: false }
    }
}

impl BuildConfig {
    pub fn new(with_content: bool, use_compress: bool) -> Self {
        BuildConfig { with_content, use_compress }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
