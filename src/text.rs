//! Character data as stored in the tree: owned, borrowed from the
//! caller, produced on demand, or marked for substitution at render
//! time.

use std::{borrow::Cow, fmt, sync::Arc};

use kstring::KString;

pub type TextProducer<'a> = Arc<dyn Fn() -> String + Send + Sync + 'a>;

#[derive(Clone)]
pub enum Text<'a> {
    Owned(KString),
    Borrowed(&'a str),
    /// Invoked anew on every `view()`, i.e. once per render.
    Lazy(TextProducer<'a>),
    /// The raw value handed to the populator of the render call,
    /// whose result is emitted instead.
    Placeholder(Box<Text<'a>>),
}

impl<'a> Text<'a> {
    pub fn lazy<F>(f: F) -> Self
    where F: Fn() -> String + Send + Sync + 'a
    {
        Text::Lazy(Arc::new(f))
    }

    /// The effective character data. For placeholders this is the
    /// raw value, not the populated one.
    pub fn view(&self) -> Cow<'_, str> {
        match self {
            Text::Owned(s) => Cow::Borrowed(s.as_str()),
            Text::Borrowed(s) => Cow::Borrowed(*s),
            Text::Lazy(f) => Cow::Owned(f()),
            Text::Placeholder(raw) => raw.view(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Text::Placeholder(_))
    }

    /// Invokes the producer for lazy values.
    pub fn is_empty(&self) -> bool {
        match self {
            Text::Owned(s) => s.is_empty(),
            Text::Borrowed(s) => s.is_empty(),
            Text::Lazy(_) => self.view().is_empty(),
            Text::Placeholder(raw) => raw.is_empty(),
        }
    }

    /// Detach from any borrowed data by resolving into an owned
    /// string. Placeholders stay placeholders.
    pub fn into_owned(self) -> Text<'static> {
        match self {
            Text::Owned(s) => Text::Owned(s),
            Text::Placeholder(raw) => Text::Placeholder(Box::new(raw.into_owned())),
            other => Text::Owned(KString::from_string(other.view().into_owned())),
        }
    }
}

impl<'a> Default for Text<'a> {
    fn default() -> Self {
        Text::Borrowed("")
    }
}

impl<'a> fmt::Debug for Text<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Text::Owned(s) => f.debug_tuple("Owned").field(&s.as_str()).finish(),
            Text::Borrowed(s) => f.debug_tuple("Borrowed").field(s).finish(),
            Text::Lazy(_) => f.write_str("Lazy(..)"),
            Text::Placeholder(raw) => f.debug_tuple("Placeholder").field(raw).finish(),
        }
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(s: &'a str) -> Self {
        Text::Borrowed(s)
    }
}

impl<'a> From<&'a String> for Text<'a> {
    fn from(s: &'a String) -> Self {
        Text::Borrowed(s.as_str())
    }
}

impl<'a> From<String> for Text<'a> {
    fn from(s: String) -> Self {
        Text::Owned(KString::from_string(s))
    }
}

impl<'a> From<KString> for Text<'a> {
    fn from(s: KString) -> Self {
        Text::Owned(s)
    }
}

impl<'a> From<&'a KString> for Text<'a> {
    fn from(s: &'a KString) -> Self {
        Text::Borrowed(s.as_str())
    }
}

impl<'a> From<Cow<'a, str>> for Text<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        match s {
            Cow::Borrowed(s) => Text::Borrowed(s),
            Cow::Owned(s) => Text::from(s),
        }
    }
}

/// Mark `value` for substitution by the render call's populator.
pub fn placeholder<'a>(value: impl Into<Text<'a>>) -> Text<'a> {
    Text::Placeholder(Box::new(value.into()))
}
