//! Human-readable identifiers for contestant detail URLs.

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

const FALLBACK_SLUG: &str = "contestant";
const SUFFIX_LEN: usize = 6;

/// Lowercases `name` and collapses every run of other characters into a
/// single `-`. Returns an empty string when nothing usable remains.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Builds a unique slug for a new contestant: the slugified name followed by
/// a short random suffix so two children with the same name do not collide.
pub fn generate_slug(name: &str) -> String {
    let base = slugify(name);
    let base = if base.is_empty() { FALLBACK_SLUG } else { base.as_str() };
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", base, &suffix[..SUFFIX_LEN])
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Mia Torres"), "mia-torres");
        assert_eq!(slugify("  Leo  O'Brien!! "), "leo-o-brien");
        assert_eq!(slugify("Zoë"), "zo");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_generate_slug_has_suffix() {
        let slug = generate_slug("Mia Torres");
        assert!(slug.starts_with("mia-torres-"));
        assert_eq!(slug.len(), "mia-torres-".len() + SUFFIX_LEN);
        assert!(is_valid_slug(&slug));
    }

    #[test]
    fn test_generate_slug_fallback() {
        let slug = generate_slug("!!!");
        assert!(slug.starts_with("contestant-"));
        assert!(is_valid_slug(&slug));
    }

    #[test]
    fn test_generated_slugs_differ() {
        assert_ne!(generate_slug("Mia"), generate_slug("Mia"));
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("mia-torres-1a2b3c"));
        assert!(!is_valid_slug("Mia-Torres"));
        assert!(!is_valid_slug("-mia"));
        assert!(!is_valid_slug("mia--torres"));
        assert!(!is_valid_slug(""));
    }
}
