//! Optional capabilities an error may expose
//!
//! Query code asks for these with [`Error::as_named`] and
//! [`Error::as_multi_cause`] instead of inspecting concrete types.

use crate::{Error, Tag};

/// Errors that can report a short classification name
pub trait Named {
    /// The name, if the error has one
    fn name(&self) -> Option<String>;
}

/// Errors made of several independent causes
pub trait MultiCause {
    /// Every cause, in the order they were collected
    fn causes(&self) -> &[Error];
}

impl Named for Tag {
    fn name(&self) -> Option<String> {
        Some(Tag::name(self).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_is_named() {
        let tag = Tag::new("net");
        assert_eq!(Named::name(&tag).as_deref(), Some("net"));
    }

    #[test]
    fn test_group_is_multi_cause() {
        let a = Error::msg("a");
        let b = Error::msg("b");
        let err = crate::combine([a.clone(), b.clone()]).unwrap();

        let causes = err.as_multi_cause().unwrap().causes();
        assert_eq!(causes.len(), 2);
        assert!(causes[0].ptr_eq(&a));
        assert!(causes[1].ptr_eq(&b));
    }
}
