//! Tests for the category list, selection and page title

#[cfg(test)]
mod tests {
    use jigsaw_wall::io::configuration::{ALL_CATEGORY_ID, FALLBACK_CATEGORY_ID};
    use jigsaw_wall::wall::category::{Category, CategoryState};

    // Tests the remote list is preceded by the "all" entry
    // Verified by appending the remote list without the built-in entry
    #[test]
    fn test_from_remote_prepends_all() {
        let state = CategoryState::from_remote(vec![
            Category::new("sea", "Sea"),
            Category::new("forest", "Forest"),
        ]);
        let ids: Vec<&str> = state.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![ALL_CATEGORY_ID, "sea", "forest"]);
        assert_eq!(state.selected(), ALL_CATEGORY_ID);
    }

    // Tests a remote "all" entry does not duplicate the built-in one
    // Verified by keeping remote entries with the reserved id
    #[test]
    fn test_from_remote_drops_duplicate_all() {
        let state = CategoryState::from_remote(vec![
            Category::new(ALL_CATEGORY_ID, "Everything"),
            Category::new("sea", "Sea"),
        ]);
        assert_eq!(state.categories().len(), 2);
        assert_ne!(state.categories()[0].name, "Everything");
    }

    // Tests the fallback list offers "all" and the placeholder category
    // Verified by returning an empty fallback
    #[test]
    fn test_fallback() {
        let state = CategoryState::default();
        let ids: Vec<&str> = state.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![ALL_CATEGORY_ID, FALLBACK_CATEGORY_ID]);
        assert_eq!(state, CategoryState::fallback());
    }

    // Tests selection reports whether it changed
    // Verified by always reporting a change
    #[test]
    fn test_select() {
        let mut state = CategoryState::from_remote(vec![Category::new("sea", "Sea")]);
        assert!(!state.select(ALL_CATEGORY_ID));
        assert!(state.select("sea"));
        assert_eq!(state.selected(), "sea");
        assert!(!state.select("sea"));
        assert!(state.select("unlisted"));
        assert_eq!(state.selected(), "unlisted");
    }

    // Tests the title uses the display name, or the id when unlisted
    // Verified by titling with the id
    #[test]
    fn test_title() {
        let mut state = CategoryState::from_remote(vec![Category::new("sea", "Sea views")]);
        state.select("sea");
        assert_eq!(state.title(), "Sea views - Wallpapers");
        state.select("mystery");
        assert_eq!(state.title(), "mystery - Wallpapers");
    }

    // Tests lookup by id
    // Verified by matching on name
    #[test]
    fn test_find() {
        let state = CategoryState::from_remote(vec![Category::new("sea", "Sea")]);
        assert_eq!(state.find("sea").map(|c| c.name.as_str()), Some("Sea"));
        assert!(state.find("Sea").is_none());
        assert_eq!(state.find("sea").and_then(|c| c.count), None);
    }
}
