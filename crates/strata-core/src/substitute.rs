//! Placeholder database substitution
//!
//! SQL resources are written against a template database name. Before a
//! resource is executed every whole-word occurrence of that name is rewritten
//! to the environment's database. Identifiers that merely contain the
//! placeholder (`SAAS_ANALYTICS_ARCHIVE`, `OLD_SAAS_ANALYTICS`) are left alone.
//! Word characters are ASCII only: `[A-Za-z0-9_]`.

use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

/// Template database name used inside SQL resources
pub const PLACEHOLDER_DATABASE: &str = "SAAS_ANALYTICS";

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_re() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?-u:\b){}(?-u:\b)",
            regex::escape(PLACEHOLDER_DATABASE)
        ))
        .expect("valid regex")
    })
}

/// Replace every whole-word placeholder occurrence with `database`.
///
/// Borrows the input unchanged when there is nothing to replace.
pub fn substitute_database<'a>(content: &'a str, database: &str) -> Cow<'a, str> {
    placeholder_re().replace_all(content, NoExpand(database))
}

/// Number of whole-word placeholder occurrences in `content`
pub fn count_placeholders(content: &str) -> usize {
    placeholder_re().find_iter(content).count()
}

#[cfg(test)]
#[path = "substitute_test.rs"]
mod tests;
