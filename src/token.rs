//! Composer inputs.
//!
//! A [`Token`] is anything [`compose`](crate::compose) accepts: text, a list of
//! tokens, a zero-argument closure producing a token, or nothing at all.
//! Most callers never name the type and let the `From` conversions do the
//! work through [`cx!`](crate::cx).

use std::borrow::Cow;
use std::fmt;

use crate::preset::Preset;

/// One input to the class-name composer.
///
/// # Example
///
/// ```rust
/// use fe_presets::{compose, Token};
///
/// let is_active = true;
/// let classes = compose([
///     Token::from("btn"),
///     Token::when(is_active, "btn-active"),
///     Token::thunk(|| vec!["px-2", "py-1"]),
///     Token::Empty,
/// ]);
/// assert_eq!(classes, "btn btn-active px-2 py-1");
/// ```
pub enum Token<'a> {
    /// Contributes nothing.
    Empty,
    /// A class name, or several separated by whitespace. Empty text is falsy.
    Text(Cow<'a, str>),
    /// Spliced in place, in order.
    List(Vec<Token<'a>>),
    /// Invoked once during composition; its result is composed in turn.
    Thunk(Box<dyn FnOnce() -> Token<'a> + 'a>),
}

impl<'a> Token<'a> {
    /// Wraps a closure as a deferred token.
    pub fn thunk<F, T>(f: F) -> Self
    where
        F: FnOnce() -> T + 'a,
        T: Into<Token<'a>>,
    {
        Token::Thunk(Box::new(move || f().into()))
    }

    /// Returns `value` when `cond` holds and [`Token::Empty`] otherwise.
    pub fn when<T: Into<Token<'a>>>(cond: bool, value: T) -> Self {
        if cond {
            value.into()
        } else {
            Token::Empty
        }
    }

    /// Flattens the token into its class-name parts, dropping empty ones.
    ///
    /// Thunks are invoked, lists are spliced, at any depth.
    pub fn flatten(self) -> Vec<Cow<'a, str>> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out.retain(|part| !part.is_empty());
        out
    }

    pub(crate) fn flatten_into(self, out: &mut Vec<Cow<'a, str>>) {
        match self {
            Token::Empty => {}
            Token::Text(text) => out.push(text),
            Token::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
            Token::Thunk(f) => f().flatten_into(out),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Empty => f.write_str("Empty"),
            Token::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Token::List(items) => f.debug_tuple("List").field(items).finish(),
            Token::Thunk(_) => f.write_str("Thunk(..)"),
        }
    }
}

impl Default for Token<'_> {
    fn default() -> Self {
        Token::Empty
    }
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(text: &'a str) -> Self {
        Token::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Token<'a> {
    fn from(text: &'a String) -> Self {
        Token::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Token<'_> {
    fn from(text: String) -> Self {
        Token::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Token<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Token::Text(text)
    }
}

impl From<Preset> for Token<'_> {
    fn from(preset: Preset) -> Self {
        Token::Text(Cow::Borrowed(preset.classes()))
    }
}

impl<'a, T: Into<Token<'a>>> From<Option<T>> for Token<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Token::Empty, Into::into)
    }
}

impl<'a, T: Into<Token<'a>>> From<Vec<T>> for Token<'a> {
    fn from(items: Vec<T>) -> Self {
        Token::List(items.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<Token<'a>>, const N: usize> From<[T; N]> for Token<'a> {
    fn from(items: [T; N]) -> Self {
        Token::List(items.into_iter().map(Into::into).collect())
    }
}

impl<'a> From<&[&'a str]> for Token<'a> {
    fn from(items: &[&'a str]) -> Self {
        Token::List(items.iter().map(|item| Token::from(*item)).collect())
    }
}

impl<'a, F, T> From<F> for Token<'a>
where
    F: FnOnce() -> T + 'a,
    T: Into<Token<'a>>,
{
    fn from(f: F) -> Self {
        Token::thunk(f)
    }
}

/// Shorthand for [`Token::thunk`].
pub fn thunk<'a, F, T>(f: F) -> Token<'a>
where
    F: FnOnce() -> T + 'a,
    T: Into<Token<'a>>,
{
    Token::thunk(f)
}
