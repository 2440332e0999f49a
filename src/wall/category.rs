//! Category list and the current selection

use crate::io::configuration::{
    ALL_CATEGORY_ID, ALL_CATEGORY_NAME, FALLBACK_CATEGORY_ID, FALLBACK_CATEGORY_NAME, TITLE_SUFFIX,
};

/// One selectable category
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    /// Identifier sent to the image API
    pub id: String,
    /// Display name
    pub name: String,
    /// Number of images, when the backend reports it
    pub count: Option<u64>,
}

impl Category {
    /// Create a category without an image count
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            count: None,
        }
    }

    fn all() -> Self {
        Self::new(ALL_CATEGORY_ID, ALL_CATEGORY_NAME)
    }
}

/// Ordered categories plus the selected id
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryState {
    categories: Vec<Category>,
    selected: String,
}

impl Default for CategoryState {
    fn default() -> Self {
        Self::fallback()
    }
}

impl CategoryState {
    /// Categories reported by the backend, preceded by the "all" entry
    ///
    /// A remote entry reusing the "all" id is dropped in favour of the built-in one.
    pub fn from_remote(remote: Vec<Category>) -> Self {
        let mut categories = vec![Category::all()];
        categories.extend(
            remote
                .into_iter()
                .filter(|category| category.id != ALL_CATEGORY_ID),
        );
        Self {
            categories,
            selected: ALL_CATEGORY_ID.to_string(),
        }
    }

    /// Built-in list used when the category fetch fails
    pub fn fallback() -> Self {
        Self {
            categories: vec![
                Category::all(),
                Category::new(FALLBACK_CATEGORY_ID, FALLBACK_CATEGORY_NAME),
            ],
            selected: ALL_CATEGORY_ID.to_string(),
        }
    }

    /// Categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Currently selected id
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Select a category; returns whether the selection changed
    ///
    /// Ids not in the list are still accepted so callers can request
    /// categories the backend knows about but did not list.
    pub fn select(&mut self, id: &str) -> bool {
        if self.selected == id {
            return false;
        }
        self.selected = id.to_string();
        true
    }

    /// Look up a category by id
    pub fn find(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Page title for the current selection
    pub fn title(&self) -> String {
        let name = self
            .find(&self.selected)
            .map_or(self.selected.as_str(), |category| category.name.as_str());
        format!("{name}{TITLE_SUFFIX}")
    }
}
