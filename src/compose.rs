//! Class-name composition.

use crate::token::Token;

/// Joins the truthy class names from `inputs` with single spaces.
///
/// Inputs are processed in order. Falsy values contribute nothing, thunks are
/// invoked and their result composed in turn, lists are spliced in place.
/// Repeated names are kept as given.
///
/// # Example
///
/// ```rust
/// use fe_presets::compose;
///
/// assert_eq!(compose(["a", "", "b"]), "a b");
/// assert_eq!(compose(Vec::<&str>::new()), "");
/// ```
///
/// For mixed input types use the [`cx!`](crate::cx) macro.
pub fn compose<'a, I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Token<'a>>,
{
    let mut parts = Vec::new();
    for input in inputs {
        input.into().flatten_into(&mut parts);
    }

    let mut out = String::new();
    for part in parts.iter().filter(|part| !part.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Composes a class list from heterogeneous inputs.
///
/// Each argument may be anything convertible into a [`Token`](crate::Token):
/// string slices, owned strings, `Option`s, vectors and arrays, presets, or
/// zero-argument closures.
///
/// # Example
///
/// ```rust
/// use fe_presets::{cx, Preset};
///
/// let disabled = false;
/// let classes = cx!(
///     Preset::Row,
///     || "toolbar",
///     disabled.then_some("is-disabled"),
///     ["px-2", ""],
/// );
/// assert_eq!(
///     classes,
///     "fe-d-flex fe-flex-row fe-items-center fe-gap-2 toolbar px-2"
/// );
/// assert_eq!(cx!(), "");
/// ```
#[macro_export]
macro_rules! cx {
    () => {
        ::std::string::String::new()
    };
    ($($input:expr),+ $(,)?) => {
        $crate::compose([$($crate::Token::from($input)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::thunk;

    #[test]
    fn test_compose_empty() {
        assert_eq!(compose(Vec::<Token<'_>>::new()), "");
    }

    #[test]
    fn test_compose_strings() {
        assert_eq!(compose(["a", "b"]), "a b");
    }

    #[test]
    fn test_compose_keeps_duplicates() {
        assert_eq!(compose(["a", "a"]), "a a");
    }

    #[test]
    fn test_compose_only_falsy() {
        assert_eq!(compose([Token::Empty, Token::from(""), thunk(|| "")]), "");
    }

    #[test]
    fn test_compose_deep_thunks() {
        let token = thunk(|| thunk(|| thunk(|| "deep")));
        assert_eq!(compose([token]), "deep");
    }

    #[test]
    fn test_compose_thunk_returning_list_with_empties() {
        let token = thunk(|| vec!["a", "", "b"]);
        assert_eq!(compose([token, Token::from("c")]), "a b c");
    }

    #[test]
    fn test_compose_passes_multi_class_text_through() {
        assert_eq!(compose(["a b", "c"]), "a b c");
    }

    #[test]
    fn test_compose_owned_strings() {
        let dynamic = format!("col-{}", 3);
        assert_eq!(compose([dynamic, String::from("row")]), "col-3 row");
    }

    #[test]
    fn test_cx_macro_trailing_comma() {
        assert_eq!(cx!("a", "b",), "a b");
    }

    #[test]
    fn test_cx_macro_borrows_string() {
        let name = String::from("a");
        assert_eq!(cx!(&name, "b"), "a b");
        assert_eq!(name, "a");
    }
}
