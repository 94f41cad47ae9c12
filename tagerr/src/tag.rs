//! Tags: named classifications attached to errors

use crate::error::{self, Error};
use std::borrow::Cow;
use std::fmt;

/// A named classification for errors.
///
/// Tags compare by name: two tags built from the same string are the same
/// tag for wrapping, membership queries and data lookups. Tags are cheap to
/// clone and can be declared as constants.
///
/// # Example
///
/// ```rust
/// use tagerr::Tag;
///
/// const STORAGE: Tag = Tag::new("storage");
///
/// let err = STORAGE.wrap(std::io::Error::other("disk full"));
/// assert!(err.is(&STORAGE));
/// assert_eq!(err.to_string(), "storage: disk full");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    name: Cow<'static, str>,
}

impl Tag {
    /// The untagged tag. Wrapping with it only attaches a stack.
    pub const EMPTY: Tag = Tag::new("");

    /// Create a tag from a static name
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// The tag's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this is the untagged tag
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Wrap an error with this tag.
    ///
    /// The call stack is captured only when `err` is not already a wrapped
    /// error. Wrapping an error whose outermost tag is this tag, or wrapping
    /// an already wrapped error with [`Tag::EMPTY`], returns it unchanged.
    pub fn wrap(&self, err: impl Into<Error>) -> Error {
        error::wrap_with(self, err.into())
    }

    /// Wrap an optional error, passing `None` through.
    pub fn wrap_opt<E: Into<Error>>(&self, err: Option<E>) -> Option<Error> {
        err.map(|err| self.wrap(err))
    }

    /// Build a message error and wrap it with this tag.
    ///
    /// Usually reached through [`tag_errorf!`](crate::tag_errorf).
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Error {
        self.wrap(Error::msg(args))
    }

    /// Put a formatted message in front of `cause` and wrap it with this tag.
    ///
    /// If `cause` is already tagged with this tag, the message is placed
    /// beneath that tag instead of repeating it, and the cause's stack is
    /// kept. Usually reached through [`tag_wrapf!`](crate::tag_wrapf).
    pub fn wrapf(&self, cause: impl Into<Error>, args: fmt::Arguments<'_>) -> Error {
        error::wrap_context(self, args.to_string(), cause.into())
    }
}

impl From<&'static str> for Tag {
    fn from(name: &'static str) -> Self {
        Tag::new(name)
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self {
            name: Cow::Owned(name),
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({:?})", self.name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A tag used as an error value reads as its own name.
impl std::error::Error for Tag {}
