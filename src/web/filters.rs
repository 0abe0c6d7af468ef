//! Custom askama filters for the blog templates.
//!
//! Handler modules bring this module into scope as `filters` so the
//! template engine can resolve `|markdown`, `|truncatewords` and
//! `|slugify`.

use std::fmt;

use pulldown_cmark::{Options, Parser, html};

use crate::utils::text::truncate_words;

/// Renders markdown to HTML.
///
/// The output is raw HTML; templates must pipe it through `|safe`.
#[askama::filter_fn]
pub fn markdown<T: fmt::Display>(value: T, _: &dyn askama::Values) -> askama::Result<String> {
    let source = value.to_string();

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(&source, options);
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);

    Ok(rendered)
}

/// Cuts text after `count` words, appending an ellipsis when truncated.
#[askama::filter_fn]
pub fn truncatewords<T: fmt::Display>(
    value: T,
    _: &dyn askama::Values,
    count: usize,
) -> askama::Result<String> {
    Ok(truncate_words(&value.to_string(), count))
}

/// Turns a tag name into its URL slug.
///
/// Tag slugs are generated with the same function on write (see
/// [`crate::infrastructure::persistence::PgTagRepository`]), so linking by
/// slugified name always matches.
#[askama::filter_fn]
pub fn slugify<T: fmt::Display>(value: T, _: &dyn askama::Values) -> askama::Result<String> {
    Ok(slug::slugify(value.to_string()))
}
