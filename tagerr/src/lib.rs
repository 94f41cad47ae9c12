//! # tagerr
//!
//! Tagged errors with a call stack captured once per error.
//!
//! ## Design
//!
//! - **Tag**: a named classification (`const DB: Tag = Tag::new("db")`).
//!   Tags compare by name.
//! - **Wrap**: `DB.wrap(err)` attaches a tag. The first wrap of an error
//!   captures the call stack; later wraps share it. Re-applying the outermost
//!   tag returns the same error. `DB.wrapf(err, args)` puts a message in
//!   front of `err` first.
//! - **Query**: `err.is(&DB)`, `err.tags()`, `err.name()`, `err.cause()`,
//!   `err.unwrap_all()`.
//! - **Group**: `combine(errs)` and [`Group`] report several failures as one
//!   error while keeping each member queryable.
//!
//! ## Usage
//!
//! ```rust
//! use tagerr::{combine, ResultExt, Tag};
//!
//! const DB: Tag = Tag::new("db");
//! const CACHE: Tag = Tag::new("cache");
//!
//! fn query() -> tagerr::Result<u64> {
//!     Err(tagerr::errorf!("connection reset")).tag(&DB)
//! }
//!
//! let err = combine([query().err(), Some(CACHE.wrap(tagerr::errorf!("miss")))]).unwrap();
//!
//! assert_eq!(err.to_string(), "db: connection reset; cache: miss");
//! assert!(err.is(&DB) && err.is(&CACHE));
//! assert_eq!(err.name().as_deref(), Some("group: cache; db"));
//! ```
//!
//! `{}` prints the compact form; `{:#}` and `{:?}` append the captured stack.

mod capability;
mod chain;
pub mod config;
mod error;
mod ext;
mod group;
#[macro_use]
mod macros;
mod stack;
mod tag;

pub use capability::{MultiCause, Named};
pub use chain::{root_source, MAX_UNWRAP_DEPTH};
pub use config::Config;
pub use error::Error;
pub use ext::ResultExt;
pub use group::{combine, Group};
pub use stack::{Frame, Stack};
pub use tag::Tag;

/// Result type alias using tagerr Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Attach a stack to an error without tagging it
pub fn wrap(err: impl Into<Error>) -> Error {
    Tag::EMPTY.wrap(err)
}

/// Shorthand for `Tag::from(name).wrap(err)`
pub fn tagged(name: impl Into<Tag>, err: impl Into<Error>) -> Error {
    name.into().wrap(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_untagged() {
        let err = wrap(std::io::Error::other("t"));
        assert_eq!(err.to_string(), "t");
        assert_eq!(err.name(), None);
        assert!(err.stack().is_some());
    }

    #[test]
    fn test_tagged() {
        let err = tagged("foo", Error::msg("t"));
        assert_eq!(err.to_string(), "foo: t");
        assert!(err.is(&Tag::new("foo")));

        let err = tagged(String::from("dyn"), err);
        assert_eq!(err.tags(), vec![Tag::new("dyn"), Tag::new("foo")]);
    }
}
