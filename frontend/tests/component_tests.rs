#[cfg(test)]
mod component_tests {
    use frontend::api::{eq_filter, public_object_url, rest_url, storage_object_url};
    use frontend::api::storage::SupabaseStorage;
    use frontend::components::common_toast::{Toast, ToastType};
    use frontend::config::Config;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use shared::photo::photo_storage_key;
    use shared::{Notification, ObjectStore};

    #[test]
    fn test_config_defaults() {
        let url = Config::supabase_url();
        assert!(url.starts_with("http"));
        assert!(!url.ends_with('/'));
        assert!(!Config::photo_bucket().is_empty());
        assert!(!Config::contestants_table().is_empty());
    }

    #[test]
    fn test_public_url_for_scenario_key() {
        let storage = SupabaseStorage::new("https://proj.supabase.co", "anon");
        let key = photo_storage_key("abc123", 1_717_000_000_000, "photo.png");
        assert_eq!(
            storage.public_url("contestant-photos", &key),
            "https://proj.supabase.co/storage/v1/object/public/contestant-photos/abc123-1717000000000.png"
        );
    }

    #[test]
    fn test_upload_and_public_urls_share_key() {
        let base = "https://proj.supabase.co";
        let upload = storage_object_url(base, "contestant-photos", "k-1.jpg");
        let public = public_object_url(base, "contestant-photos", "k-1.jpg");
        assert_eq!(upload.rsplit('/').next(), public.rsplit('/').next());
    }

    #[test]
    fn test_update_is_scoped_by_id() {
        let url = format!(
            "{}?{}",
            rest_url("https://proj.supabase.co", "contestants"),
            eq_filter("id", "abc123")
        );
        assert_eq!(url, "https://proj.supabase.co/rest/v1/contestants?id=eq.abc123");
    }

    #[rstest]
    #[case(Notification::photo_updated(), ToastType::Success)]
    #[case(Notification::destructive("Error", "Failed to upload photo"), ToastType::Error)]
    fn test_notification_toasts(#[case] notification: Notification, #[case] expected: ToastType) {
        let description = notification.description.clone();
        let toast = Toast::from(notification);
        assert_eq!(toast.toast_type, expected);
        assert_eq!(toast.message, description);
    }
}
