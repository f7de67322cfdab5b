/// Derive a URL-safe slug from a display name.
///
/// Lower-cases, turns spaces into hyphens and drops every character outside
/// `[a-z0-9_-]`. Applying it twice yields the same slug.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}
