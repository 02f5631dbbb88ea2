//! Rich-text article bodies for methods and types.
//!
//! Bodies use Telegram's HTML parse mode. Description text from the
//! specification is stripped of markup before the renderer adds its own
//! `<b>`, `<code>` and `<i>` tags.

use std::borrow::Cow;
use std::sync::LazyLock;

use botapi_docs_core::{Field, MAX_MESSAGE_LENGTH, Method, Type};
use botapi_docs_search::Entry;
use regex::Regex;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Removes every `<...>` run from `input`.
///
/// A syntactic strip, not a parse: a lone `<` without a later `>` survives.
#[must_use]
pub fn sanitize_html(input: &str) -> Cow<'_, str> {
    TAG_REGEX.replace_all(input, "")
}

/// Renders the article body for a search hit.
#[must_use]
pub fn render(entry: Entry<'_>) -> String {
    match entry {
        Entry::Method(method) => render_method(method),
        Entry::Type(ty) => render_type(ty),
    }
}

#[must_use]
pub fn render_method(method: &Method) -> String {
    render_body(
        &method.name,
        &method.description,
        Some(&method.returns),
        &method.fields,
        &method.href,
    )
}

#[must_use]
pub fn render_type(ty: &Type) -> String {
    render_body(&ty.name, &ty.description, None, &ty.fields, &ty.href)
}

fn render_body(
    name: &str,
    description: &[String],
    returns: Option<&[String]>,
    fields: &[Field],
    href: &str,
) -> String {
    let mut body = String::new();
    body.push_str(&format!("<b>{name}</b>\n"));
    body.push_str(&format!("Description: {}\n\n", sanitize_html(&description.join(", "))));

    if let Some(returns) = returns {
        body.push_str(&format!("<b>Returns:</b> {}\n", returns.join(", ")));
    }

    if !fields.is_empty() {
        body.push_str("<b>Fields:</b>\n");
        for field in fields {
            body.push_str(&format!(
                "<code>{}</code> (<b>{}</b>) - Required: <code>{}</code>\n",
                field.name,
                field.types.join(", "),
                field.required
            ));
            body.push_str(&sanitize_html(&field.description));
            body.push_str("\n\n");
        }
    }

    // Telegram measures message length in characters, not UTF-8 bytes.
    if body.chars().count() > MAX_MESSAGE_LENGTH {
        tracing::debug!(name, "article body exceeds message limit, linking to docs instead");
        return oversize_body(href);
    }
    body
}

fn oversize_body(href: &str) -> String {
    format!("See full documentation: {href}")
}
