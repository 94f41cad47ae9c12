//! Formatting constructors

/// Format a message into an untagged error with a captured stack.
///
/// ```rust
/// let err = tagerr::errorf!("port {} in use", 8080);
/// assert_eq!(err.to_string(), "port 8080 in use");
/// assert!(err.tags().is_empty());
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::Tag::EMPTY.errorf(::std::format_args!($($arg)*))
    };
}

/// Format a message into an error wrapped by the given tag.
///
/// ```rust
/// use tagerr::Tag;
///
/// const NET: Tag = Tag::new("net");
///
/// let err = tagerr::tag_errorf!(NET, "connection to {} reset", "db-1");
/// assert_eq!(err.to_string(), "net: connection to db-1 reset");
/// ```
#[macro_export]
macro_rules! tag_errorf {
    ($tag:expr, $($arg:tt)*) => {
        $crate::Tag::errorf(&$tag, ::std::format_args!($($arg)*))
    };
}

/// Put a formatted message in front of an error and wrap it with the tag.
///
/// ```rust
/// use tagerr::Tag;
///
/// const IO: Tag = Tag::new("io");
///
/// let err = tagerr::tag_errorf!(IO, "disk full");
/// let err = tagerr::tag_wrapf!(IO, err, "saving {}", "a.txt");
/// assert_eq!(err.to_string(), "io: saving a.txt: disk full");
/// assert_eq!(err.tags(), vec![IO]);
/// ```
#[macro_export]
macro_rules! tag_wrapf {
    ($tag:expr, $cause:expr, $($arg:tt)*) => {
        $crate::Tag::wrapf(&$tag, $cause, ::std::format_args!($($arg)*))
    };
}
