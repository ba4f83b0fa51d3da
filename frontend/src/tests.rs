#[cfg(test)]
mod tests {
    use crate::Route;
    use pretty_assertions::assert_eq;
    use yew_router::Routable;

    #[test]
    fn test_contestant_route_path() {
        let route = Route::ContestantDetails {
            slug: "mia-torres-1a2b3c".to_string(),
        };
        assert_eq!(route.to_path(), "/contestant/mia-torres-1a2b3c");
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/register"), Some(Route::Register));
        assert_eq!(
            Route::recognize("/contestant/leo-00ff00"),
            Some(Route::ContestantDetails {
                slug: "leo-00ff00".to_string()
            })
        );
    }

    #[test]
    fn test_only_generated_slugs_are_fetched() {
        use shared::slug::{generate_slug, is_valid_slug};

        let generated = generate_slug("Mia Torres");
        match Route::recognize(&format!("/contestant/{}", generated)) {
            Some(Route::ContestantDetails { slug }) => assert!(is_valid_slug(&slug)),
            other => panic!("unexpected route: {:?}", other),
        }
        assert!(!is_valid_slug("Mia%20Torres"));
    }
}
