//! # tagerr-data
//!
//! Associate typed data with error tags. Every error wrapped by a tag can
//! then look the data up, without the data travelling inside the error.
//!
//! ## Usage
//!
//! ```rust
//! use tagerr::Tag;
//! use tagerr_data::DataKey;
//!
//! const NOT_FOUND: Tag = Tag::new("not found");
//!
//! struct HttpStatus;
//!
//! impl DataKey for HttpStatus {
//!     type Value = u16;
//! }
//!
//! tagerr_data::set::<HttpStatus>(&NOT_FOUND, 404);
//!
//! let err = NOT_FOUND.wrap(tagerr::errorf!("no such user"));
//! assert_eq!(tagerr_data::get::<HttpStatus>(&err).as_deref(), Some(&404));
//! ```

mod registry;

pub use registry::{DataKey, Registry};

use once_cell::sync::Lazy;
use std::sync::Arc;
use tagerr::{Error, Tag};

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide registry used by the free functions
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Associate `value` with `tag` for key `K` in the global registry
pub fn set<K: DataKey>(tag: &Tag, value: K::Value) {
    GLOBAL.set::<K>(tag, value);
}

/// Remove the value for key `K` from `tag` in the global registry
pub fn remove<K: DataKey>(tag: &Tag) -> Option<Arc<K::Value>> {
    GLOBAL.remove::<K>(tag)
}

/// Look up key `K` through the tags of `err` in the global registry
pub fn get<K: DataKey>(err: &Error) -> Option<Arc<K::Value>> {
    GLOBAL.get::<K>(err)
}
