//! The Error handle and its three shapes

use crate::capability::{MultiCause, Named};
use crate::chain::{self, MAX_UNWRAP_DEPTH};
use crate::stack::Stack;
use crate::Tag;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// An error value that can carry tags and a captured call stack.
///
/// `Error` is a cheap handle: cloning it shares the same node, and
/// [`Error::ptr_eq`] tells whether two handles refer to the same node.
/// Every error is one of three shapes:
///
/// - **plain**: any foreign error (or a bare message), never tagged itself
/// - **wrapped**: one tag on top of another error, sharing the stack that
///   was captured when the chain was started
/// - **context**: a message in front of another error (see [`Tag::wrapf`])
/// - **group**: two or more errors reported together (see [`crate::Group`])
///
/// # Example
///
/// ```rust
/// use tagerr::{Error, Tag};
///
/// const FOO: Tag = Tag::new("foo");
/// const BAR: Tag = Tag::new("bar");
///
/// let base = Error::msg("t");
/// let err = FOO.wrap(BAR.wrap(base.clone()));
///
/// assert_eq!(err.to_string(), "foo: bar: t");
/// assert_eq!(err.name().as_deref(), Some("foo"));
/// assert_eq!(err.tags(), vec![FOO, BAR]);
/// assert!(err.unwrap_all().ptr_eq(&base));
/// ```
#[derive(Clone)]
pub struct Error {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Plain(Arc<dyn StdError + Send + Sync>),
    Wrapped(Arc<Wrapped>),
    Context(Arc<Context>),
    Group(Arc<Grouped>),
}

/// A tag applied on top of another error
struct Wrapped {
    tag: Tag,
    cause: Error,
    stack: Arc<Stack>,
}

/// A message placed in front of another error
struct Context {
    message: String,
    cause: Error,
}

/// Two or more errors reported together
struct Grouped {
    members: Box<[Error]>,
}

/// A plain error made from text
struct Message(String);

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Message {}

// =============================================================================
// Construction
// =============================================================================

impl Error {
    /// Create a plain error from any standard error
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            repr: Repr::Plain(Arc::new(err)),
        }
    }

    /// Create a plain error from a message
    pub fn msg(message: impl fmt::Display) -> Self {
        Self::new(Message(message.to_string()))
    }

    fn context(message: String, cause: Error) -> Self {
        Self {
            repr: Repr::Context(Arc::new(Context { message, cause })),
        }
    }

    /// Create a group error. Callers guarantee at least two members.
    pub(crate) fn group(members: Box<[Error]>) -> Self {
        debug_assert!(members.len() >= 2, "groups hold at least two errors");
        Self {
            repr: Repr::Group(Arc::new(Grouped { members })),
        }
    }
}

impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Error::new(err)
    }
}

/// Apply `tag` to `err`, capturing a stack only for errors not yet wrapped.
pub(crate) fn wrap_with(tag: &Tag, err: Error) -> Error {
    wrap_capturing(tag, err, Stack::capture)
}

/// As [`wrap_with`], taking the stack for a new chain from `capture`
pub(crate) fn wrap_capturing(tag: &Tag, err: Error, capture: impl FnOnce() -> Stack) -> Error {
    let stack = match &err.repr {
        Repr::Wrapped(node) => {
            if tag.is_empty() || node.tag == *tag {
                return err;
            }
            Arc::clone(&node.stack)
        }
        Repr::Plain(_) | Repr::Context(_) | Repr::Group(_) => Arc::new(capture()),
    };

    Error::wrapped(tag, err, stack)
}

/// Put `message` in front of `cause` and apply `tag` on top.
///
/// When `cause` is already tagged with `tag`, the message goes beneath that
/// tag and the new node keeps the cause's stack.
pub(crate) fn wrap_context(tag: &Tag, message: String, cause: Error) -> Error {
    if let Repr::Wrapped(node) = &cause.repr {
        if !tag.is_empty() && node.tag == *tag {
            let context = Error::context(message, node.cause.clone());
            return Error::wrapped(tag, context, Arc::clone(&node.stack));
        }
    }
    wrap_with(tag, Error::context(message, cause))
}

impl Error {
    fn wrapped(tag: &Tag, cause: Error, stack: Arc<Stack>) -> Self {
        Self {
            repr: Repr::Wrapped(Arc::new(Wrapped {
                tag: tag.clone(),
                cause,
                stack,
            })),
        }
    }
}

// =============================================================================
// Queries
// =============================================================================

impl Error {
    /// Check if both handles refer to the same node
    pub fn ptr_eq(&self, other: &Error) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Plain(a), Repr::Plain(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            (Repr::Wrapped(a), Repr::Wrapped(b)) => Arc::ptr_eq(a, b),
            (Repr::Context(a), Repr::Context(b)) => Arc::ptr_eq(a, b),
            (Repr::Group(a), Repr::Group(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// All tags on the error, most recently applied first.
    ///
    /// The walk stops at the first plain or context error; group members
    /// contribute their tags in member order.
    pub fn tags(&self) -> Vec<Tag> {
        let mut tags = Vec::new();
        self.collect_tags(&mut tags);
        tags
    }

    fn collect_tags(&self, tags: &mut Vec<Tag>) {
        let mut current = self;
        loop {
            match &current.repr {
                Repr::Plain(_) | Repr::Context(_) => return,
                Repr::Wrapped(node) => {
                    if !node.tag.is_empty() {
                        tags.push(node.tag.clone());
                    }
                    current = &node.cause;
                }
                Repr::Group(group) => {
                    for member in group.members.iter() {
                        member.collect_tags(tags);
                    }
                    return;
                }
            }
        }
    }

    /// Check if the error carries `tag` anywhere, including inside groups.
    ///
    /// Unlike [`Error::tags`] this also looks through context messages, and a
    /// `Tag` used directly as an error matches itself. The empty tag is never
    /// carried.
    pub fn is(&self, tag: &Tag) -> bool {
        if tag.is_empty() {
            return false;
        }

        let mut current = self;
        loop {
            match &current.repr {
                Repr::Plain(err) => return plain_tag(&**err) == Some(tag),
                Repr::Wrapped(node) => {
                    if node.tag == *tag {
                        return true;
                    }
                    current = &node.cause;
                }
                Repr::Context(context) => current = &context.cause,
                Repr::Group(group) => return group.members.iter().any(|m| m.is(tag)),
            }
        }
    }

    /// Check if `target` is this node or lies anywhere beneath it
    pub fn contains(&self, target: &Error) -> bool {
        let mut current = self;
        loop {
            if current.ptr_eq(target) {
                return true;
            }
            match &current.repr {
                Repr::Plain(_) => return false,
                Repr::Wrapped(node) => current = &node.cause,
                Repr::Context(context) => current = &context.cause,
                Repr::Group(group) => {
                    return group.members.iter().any(|m| m.contains(target))
                }
            }
        }
    }

    /// The outermost tag's name, or the group name; `None` for plain and
    /// context errors
    pub fn name(&self) -> Option<String> {
        self.as_named().and_then(|named| named.name())
    }

    /// The error one level down; a plain error is its own cause
    pub fn cause(&self) -> Error {
        self.cause_ref().clone()
    }

    fn cause_ref(&self) -> &Error {
        match &self.repr {
            Repr::Plain(_) => self,
            Repr::Wrapped(node) => &node.cause,
            Repr::Context(context) => &context.cause,
            Repr::Group(group) => &group.members[0],
        }
    }

    /// Follow [`Error::cause`] down to the innermost error
    pub fn unwrap_all(&self) -> Error {
        self.innermost().clone()
    }

    fn innermost(&self) -> &Error {
        let mut current = self;
        for _ in 0..MAX_UNWRAP_DEPTH {
            let next = current.cause_ref();
            if next.ptr_eq(current) {
                return current;
            }
            current = next;
        }
        tracing::warn!(limit = MAX_UNWRAP_DEPTH, "error cause chain did not terminate");
        current
    }

    /// The innermost foreign error, following its `source()` chain too
    pub fn root_source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.innermost().repr {
            Repr::Plain(err) => {
                let err: &(dyn StdError + 'static) = &**err;
                Some(chain::root_source(err))
            }
            _ => None,
        }
    }

    /// Find a plain error of type `E` along the cause chain
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        let mut current = self;
        for _ in 0..MAX_UNWRAP_DEPTH {
            match &current.repr {
                Repr::Plain(err) => return err.downcast_ref::<E>(),
                _ => current = current.cause_ref(),
            }
        }
        None
    }

    /// The stack captured when the chain was started; `None` if not wrapped
    pub fn stack(&self) -> Option<&Stack> {
        match &self.repr {
            Repr::Wrapped(node) => Some(&node.stack),
            _ => None,
        }
    }

    /// Group members; empty for anything that is not a group
    pub fn causes(&self) -> &[Error] {
        self.as_multi_cause().map(|group| group.causes()).unwrap_or(&[])
    }

    /// Look up the [`Named`] capability
    pub fn as_named(&self) -> Option<&dyn Named> {
        match &self.repr {
            Repr::Plain(_) | Repr::Context(_) => None,
            Repr::Wrapped(node) => Some(&**node as &dyn Named),
            Repr::Group(group) => Some(&**group as &dyn Named),
        }
    }

    /// Look up the [`MultiCause`] capability
    pub fn as_multi_cause(&self) -> Option<&dyn MultiCause> {
        match &self.repr {
            Repr::Group(group) => Some(&**group as &dyn MultiCause),
            _ => None,
        }
    }

    /// Render the error, with the captured stack when `verbose`
    pub fn format(&self, verbose: bool) -> String {
        if verbose {
            format!("{:#}", self)
        } else {
            self.to_string()
        }
    }
}

/// A tag used directly as an error value
fn plain_tag<'a>(err: &'a (dyn StdError + Send + Sync + 'static)) -> Option<&'a Tag> {
    err.downcast_ref::<Tag>().filter(|tag| !tag.is_empty())
}

// =============================================================================
// Capabilities
// =============================================================================

impl Named for Wrapped {
    fn name(&self) -> Option<String> {
        if self.tag.is_empty() {
            None
        } else {
            Some(self.tag.name().to_string())
        }
    }
}

impl Named for Grouped {
    fn name(&self) -> Option<String> {
        let mut names: Vec<String> = self.members.iter().filter_map(Error::name).collect();
        if names.is_empty() {
            return Some("group".to_string());
        }
        names.sort();
        Some(format!("group: {}", names.join("; ")))
    }
}

impl MultiCause for Grouped {
    fn causes(&self) -> &[Error] {
        &self.members
    }
}

// =============================================================================
// Formatting - `{}` is compact, `{:#}` and `{:?}` add stacks
// =============================================================================

impl Error {
    fn write_to(&self, f: &mut fmt::Formatter<'_>, verbose: bool) -> fmt::Result {
        match &self.repr {
            Repr::Plain(err) => write!(f, "{}", err),
            Repr::Wrapped(node) => {
                let mut sep = "";
                if !node.tag.is_empty() {
                    f.write_str(node.tag.name())?;
                    sep = ": ";
                }
                let text = node.cause.to_string();
                if !text.is_empty() {
                    write!(f, "{}{}", sep, text)?;
                }
                if verbose {
                    for frame in node.stack.frames() {
                        write!(f, "\n\t{}:{}", frame.function, frame.line)?;
                    }
                }
                Ok(())
            }
            Repr::Context(context) => {
                f.write_str(&context.message)?;
                let text = context.cause.to_string();
                if !text.is_empty() {
                    if !context.message.is_empty() {
                        f.write_str(": ")?;
                    }
                    f.write_str(&text)?;
                }
                Ok(())
            }
            Repr::Group(group) => {
                let delim = if verbose {
                    f.write_str("group:\n--- ")?;
                    "\n--- "
                } else {
                    "; "
                };
                for (i, member) in group.members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(delim)?;
                    }
                    member.write_to(f, verbose)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, f.alternate())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, true)
    }
}

// =============================================================================
// Bridge into `std::error::Error`
// =============================================================================

/// `Error` seen through `std::error::Error`.
///
/// Tagged, context and group text already spells out every cause, so only a
/// plain error exposes a source: the foreign error's own.
struct Compat(Error);

impl fmt::Display for Compat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Compat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl StdError for Compat {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.repr {
            Repr::Plain(err) => err.source(),
            _ => None,
        }
    }
}

impl From<Error> for Box<dyn StdError + Send + Sync + 'static> {
    fn from(err: Error) -> Self {
        Box::new(Compat(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine;

    const FOO: Tag = Tag::new("foo");
    const BAR: Tag = Tag::new("bar");
    const BAZ: Tag = Tag::new("baz");

    #[test]
    fn test_is() {
        assert!(FOO.errorf(format_args!("t")).is(&FOO));
        assert!(!BAR.errorf(format_args!("t")).is(&FOO));

        let err = BAR.wrap(FOO.errorf(format_args!("t")));
        assert!(err.is(&FOO));
        assert!(err.is(&BAR));
        assert!(!err.is(&BAZ));

        let err = FOO.wrap(BAR.errorf(format_args!("t")));
        assert!(err.is(&FOO));
        assert!(err.is(&BAR));
        assert!(!err.is(&BAZ));
    }

    #[test]
    fn test_same_name_is_same_tag() {
        let t1 = Tag::new("c");
        let t2 = Tag::from(String::from("c"));
        assert!(t1.errorf(format_args!("t")).is(&t2));
        assert!(t2.errorf(format_args!("t")).is(&t1));
    }

    #[test]
    fn test_plain_error_queries() {
        let err = Error::msg("plain");
        assert!(err.tags().is_empty());
        assert_eq!(err.name(), None);
        assert!(err.cause().ptr_eq(&err));
        assert!(err.unwrap_all().ptr_eq(&err));
        assert!(err.stack().is_none());
        assert!(!err.is(&FOO));
    }

    #[test]
    fn test_format() {
        let err = FOO.wrap(Error::msg("t"));
        assert_eq!(err.to_string(), "foo: t");
        let err = BAR.wrap(err);
        assert_eq!(err.to_string(), "bar: foo: t");
    }

    #[test]
    fn test_format_with_stack() {
        let err = FOO.errorf(format_args!("t"));
        assert!(!err.format(false).contains('\n'));
        assert!(err.format(true).contains('\n'));
        assert!(format!("{:?}", err).contains('\n'));
        assert!(format!("{:#}", err).starts_with("foo: t\n\t"));
    }

    #[test]
    fn test_empty_tag() {
        let empty = Tag::EMPTY;
        assert_eq!(empty.errorf(format_args!("test")).to_string(), "test");
        assert_eq!(
            FOO.wrap(empty.errorf(format_args!("test"))).to_string(),
            "foo: test"
        );
        assert_eq!(empty.errorf(format_args!("")).to_string(), "");
        assert_eq!(FOO.errorf(format_args!("")).to_string(), "foo");
    }

    #[test]
    fn test_empty_tag_keeps_tagged_node() {
        let err = FOO.errorf(format_args!("t"));
        let again = Tag::EMPTY.wrap(err.clone());
        assert!(again.ptr_eq(&err));
        assert_eq!(again.tags(), vec![FOO]);
    }

    #[test]
    fn test_tags_dedup_outermost() {
        let err = Error::msg("t");
        assert!(err.tags().is_empty());

        let err = FOO.wrap(err);
        assert_eq!(err.tags(), vec![FOO]);

        let err = FOO.wrap(err);
        assert_eq!(err.tags(), vec![FOO]);

        let err = BAR.wrap(err);
        assert_eq!(err.tags(), vec![BAR, FOO]);

        let err = BAR.wrap(err);
        assert_eq!(err.tags(), vec![BAR, FOO]);

        // only the outermost tag is checked
        let err = FOO.wrap(err);
        assert_eq!(err.tags(), vec![FOO, BAR, FOO]);
    }

    #[test]
    fn test_idempotent_wrap_returns_same_node() {
        let err = FOO.wrap(Error::msg("t"));
        let again = FOO.wrap(err.clone());
        assert!(again.ptr_eq(&err));
        assert!(std::ptr::eq(again.stack().unwrap(), err.stack().unwrap()));
    }

    #[test]
    fn test_stack_captured_once() {
        let first = Tag::EMPTY.wrap(Error::msg("t"));
        let mut err = first.clone();
        for tag in [FOO, BAR, BAZ] {
            err = tag.wrap(err);
        }
        assert!(std::ptr::eq(err.stack().unwrap(), first.stack().unwrap()));
    }

    #[test]
    fn test_name() {
        assert_eq!(Tag::EMPTY.errorf(format_args!("t")).name(), None);
        assert_eq!(FOO.errorf(format_args!("t")).name().as_deref(), Some("foo"));
        assert_eq!(
            BAR.wrap(FOO.errorf(format_args!("t"))).name().as_deref(),
            Some("bar")
        );
    }

    #[test]
    fn test_cause_and_unwrap_all() {
        let base = Error::msg("t");
        let inner = BAR.wrap(base.clone());
        let outer = FOO.wrap(inner.clone());

        assert!(outer.cause().ptr_eq(&inner));
        assert!(inner.cause().ptr_eq(&base));
        assert!(outer.unwrap_all().ptr_eq(&base));
    }

    #[test]
    fn test_immutable() {
        let err = Tag::EMPTY.errorf(format_args!(""));
        let with_foo = FOO.wrap(err.clone());
        let with_bar = BAR.wrap(err.clone());

        assert_eq!(err.to_string(), "");
        assert_eq!(with_foo.to_string(), "foo");
        assert_eq!(with_bar.to_string(), "bar");
    }

    #[test]
    fn test_concurrent_wraps() {
        let err = Tag::EMPTY.errorf(format_args!("race"));
        let (a, b) = std::thread::scope(|s| {
            let a = s.spawn(|| FOO.wrap(err.clone()));
            let b = s.spawn(|| BAR.wrap(err.clone()));
            (a.join().unwrap(), b.join().unwrap())
        });

        assert_eq!(a.tags(), vec![FOO]);
        assert_eq!(b.tags(), vec![BAR]);
        assert!(err.tags().is_empty());
        assert!(std::ptr::eq(a.stack().unwrap(), b.stack().unwrap()));
    }

    #[test]
    fn test_tag_as_error() {
        let err = Error::from(FOO);
        assert_eq!(err.to_string(), "foo");
        assert!(err.tags().is_empty());
        assert_eq!(err.name(), None);
        assert!(err.as_named().is_none());
        assert!(err.is(&FOO));
        assert!(!err.is(&BAR));
    }

    #[test]
    fn test_tag_over_tag_error() {
        let err = FOO.wrap(Error::from(FOO));
        assert_eq!(err.tags(), vec![FOO]);
        assert_eq!(err.name().as_deref(), Some("foo"));
        assert_eq!(err.to_string(), "foo: foo");

        let err = crate::wrap(Error::from(FOO));
        assert!(err.tags().is_empty());
        assert_eq!(err.name(), None);
        assert!(err.is(&FOO));
    }

    #[test]
    fn test_verbose_without_frames() {
        let err = wrap_capturing(&FOO, Error::msg("t"), Stack::empty);
        assert!(err.stack().unwrap().is_empty());
        assert_eq!(err.format(true), "foo: t");
        assert_eq!(format!("{:?}", err), "foo: t");

        let err = BAR.wrap(err);
        assert_eq!(err.format(true), "bar: foo: t");

        let group = combine([err, wrap_capturing(&BAZ, Error::msg("u"), Stack::empty)]).unwrap();
        assert_eq!(group.format(true), "group:\n--- bar: foo: t\n--- baz: u");
    }

    #[test]
    fn test_wrapf_hoists_same_tag() {
        let inner = FOO.errorf(format_args!("t"));
        let err = FOO.wrapf(inner.clone(), format_args!("loading {}", "cfg"));

        assert_eq!(err.to_string(), "foo: loading cfg: t");
        assert_eq!(err.tags(), vec![FOO]);
        assert!(std::ptr::eq(err.stack().unwrap(), inner.stack().unwrap()));
        assert!(!err.ptr_eq(&inner));
        assert!(err.unwrap_all().ptr_eq(&inner.unwrap_all()));
        // the cause node is left alone
        assert_eq!(inner.to_string(), "foo: t");
    }

    #[test]
    fn test_wrapf_other_tag() {
        let inner = FOO.errorf(format_args!("t"));
        let err = BAR.wrapf(inner.clone(), format_args!("loading"));

        assert_eq!(err.to_string(), "bar: loading: foo: t");
        assert_eq!(err.tags(), vec![BAR]);
        assert!(err.is(&FOO));
        assert!(err.contains(&inner));
        assert!(err.cause().cause().ptr_eq(&inner));
        assert!(!std::ptr::eq(err.stack().unwrap(), inner.stack().unwrap()));
    }

    #[test]
    fn test_wrapf_untagged() {
        let err = Tag::EMPTY.wrapf(FOO.errorf(format_args!("t")), format_args!("loading"));
        assert_eq!(err.to_string(), "loading: foo: t");
        assert!(err.tags().is_empty());
        assert_eq!(err.name(), None);
        assert!(err.is(&FOO));

        let err = FOO.wrapf(Error::msg("t"), format_args!(""));
        assert_eq!(err.to_string(), "foo: t");
    }

    #[test]
    fn test_into_boxed_std_error() {
        let err = FOO.wrap(std::io::Error::other("disk"));
        let boxed: Box<dyn StdError + Send + Sync> = err.into();
        assert_eq!(boxed.to_string(), "foo: disk");
        assert!(format!("{:?}", boxed).starts_with("foo: disk"));
        assert!(boxed.source().is_none());

        #[derive(Debug)]
        struct Load(std::io::Error);

        impl fmt::Display for Load {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "load failed")
            }
        }

        impl StdError for Load {
            fn source(&self) -> Option<&(dyn StdError + 'static)> {
                Some(&self.0)
            }
        }

        let err = Error::new(Load(std::io::Error::other("inner")));
        let boxed: Box<dyn StdError + Send + Sync> = err.into();
        assert_eq!(boxed.to_string(), "load failed");
        assert_eq!(boxed.source().unwrap().to_string(), "inner");
    }

    #[test]
    fn test_downcast_ref() {
        let err = FOO.wrap(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
        assert!(err.downcast_ref::<std::fmt::Error>().is_none());
    }

    #[test]
    fn test_root_source() {
        let err = FOO.wrap(std::io::Error::other("disk"));
        assert_eq!(err.root_source().unwrap().to_string(), "disk");
    }

    #[test]
    fn test_capability_queries() {
        let plain = Error::msg("t");
        assert!(plain.as_named().is_none());
        assert!(plain.as_multi_cause().is_none());
        assert!(plain.causes().is_empty());

        let tagged = FOO.wrap(plain);
        assert!(tagged.as_named().is_some());
        assert!(tagged.as_multi_cause().is_none());
    }
}
