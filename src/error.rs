//! Error kinds for the trie library, and the `err_at!` construction macro.
//!
//! Every variant carries `(prefix, message)` where `prefix` is the
//! `file!():line!()` of the call site that raised it, mirroring the
//! `err_at!` convention used throughout the teacher crate's `robt` module.

use std::{cell::RefCell, fmt};

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = RefCell::new(None);
}

/// The small, closed set of error kinds the core distinguishes.
#[derive(Debug)]
pub enum Error {
    /// Operation not valid for the instance's current mode (Build vs Reader).
    WrongMode(String, String),
    /// An arena pool would have grown past `u32::MAX - 1` entries.
    OutOfMemory(String, String),
    /// Failed to open a file.
    IoOpen(String, String),
    /// Failed to stat a file.
    IoStat(String, String),
    /// Failed to create a memory mapping.
    IoMap(String, String),
    /// Failed to write the serialized index.
    IoWrite(String, String),
    /// The file's version byte does not match a recognized layout.
    BadVersion(String, String),
    /// Header counters or region offsets are inconsistent with file length.
    MalformedFile(String, String),
    /// A value to be stored contains the forbidden `'\n'` separator byte.
    InvalidValue(String, String),
}

impl Error {
    fn kind_str(&self) -> &'static str {
        match self {
            Error::WrongMode(..) => "WrongMode",
            Error::OutOfMemory(..) => "OutOfMemory",
            Error::IoOpen(..) => "IoOpen",
            Error::IoStat(..) => "IoStat",
            Error::IoMap(..) => "IoMap",
            Error::IoWrite(..) => "IoWrite",
            Error::BadVersion(..) => "BadVersion",
            Error::MalformedFile(..) => "MalformedFile",
            Error::InvalidValue(..) => "InvalidValue",
        }
    }

    fn parts(&self) -> (&str, &str) {
        match self {
            Error::WrongMode(p, m)
            | Error::OutOfMemory(p, m)
            | Error::IoOpen(p, m)
            | Error::IoStat(p, m)
            | Error::IoMap(p, m)
            | Error::IoWrite(p, m)
            | Error::BadVersion(p, m)
            | Error::MalformedFile(p, m)
            | Error::InvalidValue(p, m) => (p.as_str(), m.as_str()),
        }
    }

    /// Record this error's human-readable form as the thread's last error.
    pub fn remember(self) -> Self {
        let text = self.to_string();
        LAST_ERROR.with(|cell| *cell.borrow_mut() = Some(text));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (prefix, msg) = self.parts();
        write!(f, "{} at {}, {}", self.kind_str(), prefix, msg)
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Human-readable mapping of the last error constructed on this thread.
///
/// Out-of-band convenience channel kept for source-contract parity; the
/// primary way to observe failures is the returned `Result`.
pub fn last_error() -> String {
    LAST_ERROR.with(|cell| cell.borrow().clone().unwrap_or_default())
}

#[doc(hidden)]
pub fn err_at_prefix(file: &str, line: u32) -> String {
    format!("{}:{}", file, line)
}

/// Construct or convert into an `Error`, stamping the call site and
/// updating the [`last_error`] channel.
///
/// Three forms, matching the teacher crate's `err_at!` usage:
/// - `err_at!(Kind, result_expr)` — wraps a foreign `Result`'s `Err` arm.
/// - `err_at!(Kind, result_expr, "fmt", args...)` — same, with a custom message
///   prefixed to the foreign error's `Display`.
/// - `err_at!(Kind, msg: "fmt", args...)` — builds an `Err` directly.
#[macro_export]
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+ $(,)?) => {{
        let prefix = $crate::error::err_at_prefix(file!(), line!());
        Err($crate::Error::$v(prefix, format!($($arg),+)).remember())
    }};
    ($v:ident, $e:expr) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = $crate::error::err_at_prefix(file!(), line!());
                Err($crate::Error::$v(prefix, format!("{}", err)).remember())
            }
        }
    }};
    ($v:ident, $e:expr, $($arg:expr),+ $(,)?) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = $crate::error::err_at_prefix(file!(), line!());
                let msg = format!($($arg),+);
                Err($crate::Error::$v(prefix, format!("{}, {}", msg, err)).remember())
            }
        }
    }};
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
