pub mod contestants;
pub mod storage;
pub mod utils;

/// Upload endpoint for one object
pub fn storage_object_url(base_url: &str, bucket: &str, key: &str) -> String {
    format!(
        "{}/storage/v1/object/{}/{}",
        base_url,
        bucket,
        urlencoding::encode(key)
    )
}

/// Public download URL for one object in a public bucket
pub fn public_object_url(base_url: &str, bucket: &str, key: &str) -> String {
    format!(
        "{}/storage/v1/object/public/{}/{}",
        base_url,
        bucket,
        urlencoding::encode(key)
    )
}

pub fn rest_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url, table)
}

/// Row filter in the table API's `column=eq.value` form
pub fn eq_filter(column: &str, value: &str) -> String {
    format!("{}=eq.{}", column, urlencoding::encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "https://proj.supabase.co";

    #[test]
    fn test_storage_urls() {
        assert_eq!(
            storage_object_url(BASE, "contestant-photos", "abc123-1717.png"),
            "https://proj.supabase.co/storage/v1/object/contestant-photos/abc123-1717.png"
        );
        assert_eq!(
            public_object_url(BASE, "contestant-photos", "abc123-1717.png"),
            "https://proj.supabase.co/storage/v1/object/public/contestant-photos/abc123-1717.png"
        );
    }

    #[test]
    fn test_key_is_escaped() {
        assert_eq!(
            public_object_url(BASE, "b", "my photo.png"),
            "https://proj.supabase.co/storage/v1/object/public/b/my%20photo.png"
        );
    }

    #[test]
    fn test_rest_filter() {
        assert_eq!(rest_url(BASE, "contestants"), "https://proj.supabase.co/rest/v1/contestants");
        assert_eq!(eq_filter("id", "abc123"), "id=eq.abc123");
        assert_eq!(eq_filter("slug", "a&b"), "slug=eq.a%26b");
    }
}
