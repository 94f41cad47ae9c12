//! # Error Groups
//!
//! Collects errors from independent operations (typically a fan-out) and
//! reports them as one. `None`s are skipped, a single error is returned as
//! is, and two or more become a group error that keeps every member
//! queryable.

use crate::Error;

/// Combine several optional errors into one.
///
/// Returns `None` when nothing failed and the error itself when exactly one
/// did.
///
/// ```rust
/// use tagerr::{combine, Error};
///
/// let a = Error::msg("a");
/// let b = Error::msg("b");
///
/// assert!(combine(Vec::<Error>::new()).is_none());
/// assert!(combine([Some(a.clone()), None]).unwrap().ptr_eq(&a));
/// assert_eq!(combine([None, Some(a), None, Some(b)]).unwrap().to_string(), "a; b");
/// ```
pub fn combine<I>(errs: I) -> Option<Error>
where
    I: IntoIterator,
    I::Item: Into<Option<Error>>,
{
    errs.into_iter().collect::<Group>().into_err()
}

/// An accumulator of errors, resolved with [`Group::err`]
#[derive(Debug, Clone, Default)]
pub struct Group {
    errs: Vec<Error>,
}

impl Group {
    /// Create an empty group
    pub fn new() -> Self {
        Self { errs: Vec::new() }
    }

    /// Add one error; `None` is ignored
    pub fn append(&mut self, err: impl Into<Option<Error>>) {
        if let Some(err) = err.into() {
            self.errs.push(err);
        }
    }

    /// Add several errors; `None`s are ignored
    pub fn add<I>(&mut self, errs: I)
    where
        I: IntoIterator,
        I::Item: Into<Option<Error>>,
    {
        for err in errs {
            self.append(err);
        }
    }

    /// Number of errors collected
    pub fn len(&self) -> usize {
        self.errs.len()
    }

    /// Check if no error was collected
    pub fn is_empty(&self) -> bool {
        self.errs.is_empty()
    }

    /// Iterate over the collected errors in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errs.iter()
    }

    /// Resolve the collected errors.
    ///
    /// Can be called any number of times; the group is left untouched.
    pub fn err(&self) -> Option<Error> {
        match self.errs.as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            many => Some(Error::group(many.into())),
        }
    }

    /// Resolve the collected errors, consuming the group
    pub fn into_err(self) -> Option<Error> {
        match self.errs.len() {
            0 => None,
            1 => self.errs.into_iter().next(),
            _ => Some(Error::group(self.errs.into_boxed_slice())),
        }
    }
}

impl<E> FromIterator<E> for Group
where
    E: Into<Option<Error>>,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut group = Group::new();
        group.add(iter);
        group
    }
}

impl<E> Extend<E> for Group
where
    E: Into<Option<Error>>,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
