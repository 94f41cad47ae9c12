//! Tagging errors while they propagate through `?`

use crate::{Error, Tag};

/// Extension trait for tagging the error side of any `Result`.
///
/// ```rust
/// use tagerr::{ResultExt, Tag};
///
/// const CONFIG: Tag = Tag::new("config");
///
/// fn load() -> tagerr::Result<String> {
///     let text = std::fs::read_to_string("/nonexistent/app.toml").tag(&CONFIG)?;
///     Ok(text)
/// }
///
/// let err = load().unwrap_err();
/// assert!(err.is(&CONFIG));
/// ```
pub trait ResultExt<T> {
    /// Wrap the error with `tag`
    fn tag(self, tag: &Tag) -> Result<T, Error>;

    /// Wrap the error without a tag, only attaching a stack
    fn stack(self) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    fn tag(self, tag: &Tag) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(tag.wrap(err)),
        }
    }

    fn stack(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Tag::EMPTY.wrap(err)),
        }
    }
}
