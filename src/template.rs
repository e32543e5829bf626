//! MiniJinja integration.
//!
//! [`register_functions`] exposes the composer and a preset registry to
//! templates:
//!
//! ```jinja
//! <div class="{{ cx(preset('Card'), 'shadow' if raised, extra) }}">
//! ```
//!
//! Template values are dynamically typed, so `cx` maps them onto tokens the
//! way the composer treats falsy values: `none`, undefined, `false`, `""`,
//! `0` and empty sequences drop out, strings pass through, sequences are
//! spliced, other numbers and `true` are rendered as text. Maps and other
//! values are rejected, empty or not.

use minijinja::value::{Rest, ValueKind};
use minijinja::{Environment, Error, ErrorKind, Value};

use crate::preset::Presets;
use crate::token::Token;

/// Registers the `cx` and `preset` functions on a MiniJinja environment.
///
/// `preset(name)` looks `name` up in `presets` and fails the render for
/// unknown names.
///
/// # Example
///
/// ```rust
/// use fe_presets::{register_functions, Presets};
/// use minijinja::{context, Environment};
///
/// let mut env = Environment::new();
/// register_functions(&mut env, Presets::builtin());
///
/// let html = env
///     .render_str(
///         r#"<span class="{{ cx(preset('Muted'), 'small' if small) }}">"#,
///         context! { small => true },
///     )
///     .unwrap();
/// assert_eq!(html, r#"<span class="fe-text-muted small">"#);
/// ```
pub fn register_functions(env: &mut Environment<'_>, presets: Presets) {
    env.add_function("cx", |args: Rest<Value>| -> Result<String, Error> {
        let tokens = args
            .iter()
            .map(value_to_token)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(crate::compose(tokens))
    });

    env.add_function("preset", move |name: String| -> Result<String, Error> {
        presets
            .resolve(&name)
            .map(str::to_string)
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
    });
}

/// Converts a template value into a composer token.
fn value_to_token(value: &Value) -> Result<Token<'static>, Error> {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(Token::Empty),
        ValueKind::String | ValueKind::Number | ValueKind::Bool => {
            Ok(Token::when(value.is_true(), value.to_string()))
        }
        ValueKind::Seq | ValueKind::Iterable => {
            let items = value
                .try_iter()?
                .map(|item| value_to_token(&item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Token::List(items))
        }
        kind => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("cannot use a value of type {} as a class name", kind),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn env() -> Environment<'static> {
        let mut env = Environment::new();
        register_functions(&mut env, Presets::builtin());
        env
    }

    #[test]
    fn test_cx_strings() {
        let out = env().render_str("{{ cx('a', 'b') }}", ()).unwrap();
        assert_eq!(out, "a b");
    }

    #[test]
    fn test_cx_no_args() {
        let out = env().render_str("[{{ cx() }}]", ()).unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_cx_drops_falsy() {
        let out = env()
            .render_str(
                "{{ cx('a', none, false, '', 0, missing, flag and 'b') }}",
                context! { flag => false },
            )
            .unwrap();
        assert_eq!(out, "a");
    }

    #[test]
    fn test_cx_splices_sequences() {
        let out = env()
            .render_str(
                "{{ cx('a', extra, 'd') }}",
                context! { extra => vec!["b", "", "c"] },
            )
            .unwrap();
        assert_eq!(out, "a b c d");
    }

    #[test]
    fn test_cx_coerces_numbers() {
        let out = env().render_str("{{ cx('col', 3) }}", ()).unwrap();
        assert_eq!(out, "col 3");
    }

    #[test]
    fn test_cx_rejects_maps() {
        let err = env()
            .render_str("{{ cx('a', {'b': 1}) }}", ())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn test_cx_rejects_empty_map() {
        let err = env().render_str("[{{ cx('a', {}) }}]", ()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn test_cx_rejects_map_inside_sequence() {
        let err = env()
            .render_str("{{ cx('a', ['b', {}]) }}", ())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn test_cx_drops_empty_sequence() {
        let out = env().render_str("{{ cx('a', [], 'b') }}", ()).unwrap();
        assert_eq!(out, "a b");
    }

    #[test]
    fn test_preset_lookup() {
        let out = env().render_str("{{ preset('Truncate') }}", ()).unwrap();
        assert_eq!(out, "fe-truncate fe-min-w-0");
    }

    #[test]
    fn test_preset_unknown_fails() {
        let err = env().render_str("{{ preset('Panel') }}", ()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn test_preset_with_cx() {
        let out = env()
            .render_str("{{ cx(preset('Muted'), 'x') }}", ())
            .unwrap();
        assert_eq!(out, "fe-text-muted x");
    }

    #[test]
    fn test_custom_registry() {
        let mut env = Environment::new();
        register_functions(&mut env, Presets::new().add("Panel", "p-4"));
        let out = env.render_str("{{ preset('Panel') }}", ()).unwrap();
        assert_eq!(out, "p-4");
    }
}
