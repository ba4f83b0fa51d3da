/// An image picked by the user, held in memory for a single upload attempt
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoFile {
    /// Original file name as reported by the browser
    pub name: String,
    /// MIME type; the browser may leave this empty
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn extension(&self) -> &str {
        file_extension(&self.name)
    }

    /// Content type sent with the upload, guessed from the extension when the
    /// browser did not supply one.
    pub fn effective_content_type(&self) -> &str {
        if !self.content_type.is_empty() {
            return &self.content_type;
        }
        match self.extension().to_ascii_lowercase().as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "heic" => "image/heic",
            "svg" => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Text after the last `.`; a name without a dot is returned whole.
pub fn file_extension(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}

/// Object key for one upload attempt: `{contestant_id}-{timestamp_ms}.{ext}`.
pub fn photo_storage_key(contestant_id: &str, timestamp_ms: i64, file_name: &str) -> String {
    format!(
        "{}-{}.{}",
        contestant_id,
        timestamp_ms,
        file_extension(file_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_key_for_png() {
        assert_eq!(
            photo_storage_key("abc123", 1_717_000_000_000, "photo.png"),
            "abc123-1717000000000.png"
        );
    }

    #[rstest]
    #[case("photo.png", "png")]
    #[case("holiday.photo.JPG", "JPG")]
    #[case("photo", "photo")]
    #[case("photo.", "")]
    fn test_file_extension(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(file_extension(name), expected);
    }

    #[rstest]
    #[case("a.PNG", "", "image/png")]
    #[case("a.jpeg", "", "image/jpeg")]
    #[case("a.bin", "", "application/octet-stream")]
    #[case("a.png", "image/webp", "image/webp")]
    fn test_effective_content_type(#[case] name: &str, #[case] mime: &str, #[case] expected: &str) {
        let file = PhotoFile::new(name, mime, vec![1, 2, 3]);
        assert_eq!(file.effective_content_type(), expected);
    }

    proptest! {
        #[test]
        fn keys_differ_across_timestamps(
            id in "[a-z0-9]{1,24}",
            t1 in 0i64..4_000_000_000_000,
            t2 in 0i64..4_000_000_000_000,
        ) {
            prop_assume!(t1 != t2);
            prop_assert_ne!(
                photo_storage_key(&id, t1, "photo.png"),
                photo_storage_key(&id, t2, "photo.png")
            );
        }

        #[test]
        fn keys_start_with_contestant_id(id in "[a-z0-9-]{1,36}", t in 0i64..4_000_000_000_000) {
            let key = photo_storage_key(&id, t, "x.jpg");
            let prefix = format!("{}-", id);
            prop_assert!(key.starts_with(&prefix));
            prop_assert!(key.ends_with(".jpg"));
        }
    }
}
