//! Slugs
//!
//! URL-safe identifiers derived from car names, used for public detail-page routing.

/// Derive a slug from a display name.
///
/// The result is lowercase, contains only `[a-z0-9-]`, collapses every run of other
/// characters into a single hyphen and never starts or ends with a hyphen.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }

            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Append a numeric suffix to a slug, e.g. `nissan-skyline` → `nissan-skyline-2`.
#[must_use]
pub fn with_suffix(slug: &str, suffix: u32) -> String {
    if slug.is_empty() {
        return suffix.to_string();
    }

    format!("{slug}-{suffix}")
}

/// First of `slug`, `slug-2`, `slug-3`, ... for which `is_taken` is false.
#[must_use]
pub fn unique(slug: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(slug) {
        return slug.to_string();
    }

    (2..)
        .map(|suffix| with_suffix(slug, suffix))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| slug.to_string())
}

/// Whether a string is already a well-formed slug.
#[must_use]
pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}
