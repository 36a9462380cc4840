//! Loaded and validated site content.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ContentError;
use crate::navigation::{self, NavigationSection, filter_navigation};
use crate::page::ContentPage;
use crate::router::{Resolved, default_not_found_page, normalize_path};
use crate::scanner::Scanner;
use crate::variant::Variant;

/// Navigation file inside the content directory.
pub const NAVIGATION_FILENAME: &str = "navigation.yaml";

/// Pages directory inside the content directory.
pub const PAGES_DIR: &str = "pages";

/// Page id of the authored not-found page (`pages/404.md`).
pub const NOT_FOUND_PAGE: &str = "404";

/// All pages and navigation of the site.
///
/// Immutable once built. Reloading produces a new registry.
#[derive(Clone, Debug)]
pub struct ContentRegistry {
    pages: HashMap<String, ContentPage>,
    navigation: Vec<NavigationSection>,
    not_found: ContentPage,
}

impl ContentRegistry {
    /// Load content from `dir`.
    ///
    /// Reads `navigation.yaml` (optional, empty if absent) and every markdown
    /// file under `pages/`, then validates the navigation against the pages.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is missing or a file cannot be read.
    /// Invalid navigation, two sources for one route and unknown sample
    /// variants are errors too.
    pub fn load(dir: &Path) -> Result<Self, ContentError> {
        if !dir.is_dir() {
            return Err(ContentError::DirectoryNotFound(dir.to_path_buf()));
        }

        let navigation = load_navigation(&dir.join(NAVIGATION_FILENAME))?;

        let mut pages = Vec::new();
        let mut not_found = None;
        let mut sources: HashMap<String, PathBuf> = HashMap::new();
        for page_ref in Scanner::new(dir.join(PAGES_DIR)).scan() {
            if let Some(first) = sources.get(&page_ref.url_path) {
                return Err(ContentError::DuplicatePage {
                    paths: vec![first.clone(), page_ref.content_path],
                    id: page_ref.url_path,
                });
            }

            let body = fs::read_to_string(&page_ref.content_path).map_err(|source| {
                ContentError::Io {
                    path: page_ref.content_path.clone(),
                    source,
                }
            })?;
            let page = ContentPage::parse(page_ref.url_path, body).map_err(|source| {
                ContentError::InvalidSampleVariant {
                    path: page_ref.content_path.clone(),
                    source,
                }
            })?;
            sources.insert(page.id.clone(), page_ref.content_path);

            if page.id == NOT_FOUND_PAGE {
                not_found = Some(page);
            } else {
                pages.push(page);
            }
        }

        let registry = Self::from_parts(pages, navigation, not_found)?;
        tracing::info!(
            dir = %dir.display(),
            pages = registry.len(),
            sections = registry.navigation.len(),
            "Loaded content"
        );
        Ok(registry)
    }

    /// Build a registry from already loaded parts.
    ///
    /// Falls back to a built-in not-found page when `not_found` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if two pages share an id or the navigation fails
    /// validation.
    pub fn from_parts(
        pages: Vec<ContentPage>,
        navigation: Vec<NavigationSection>,
        not_found: Option<ContentPage>,
    ) -> Result<Self, ContentError> {
        let mut by_id = HashMap::with_capacity(pages.len());
        for page in pages {
            if let Some(previous) = by_id.insert(page.id.clone(), page) {
                return Err(ContentError::DuplicatePage {
                    id: previous.id,
                    paths: Vec::new(),
                });
            }
        }
        let pages = by_id;

        navigation::validate(&navigation, |id| pages.contains_key(id))?;

        Ok(Self {
            pages,
            navigation,
            not_found: not_found.unwrap_or_else(default_not_found_page),
        })
    }

    /// Resolve a request path to a page.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolved<'_> {
        match self.pages.get(&normalize_path(path)) {
            Some(page) => Resolved::Page(page),
            None => Resolved::NotFound(&self.not_found),
        }
    }

    /// Page with the given normalized id.
    #[must_use]
    pub fn page(&self, id: &str) -> Option<&ContentPage> {
        self.pages.get(id)
    }

    /// All pages sorted by id.
    #[must_use]
    pub fn pages(&self) -> Vec<&ContentPage> {
        let mut pages: Vec<_> = self.pages.values().collect();
        pages.sort_by(|a, b| a.id.cmp(&b.id));
        pages
    }

    /// Number of routable pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Authored navigation, unfiltered.
    #[must_use]
    pub fn navigation(&self) -> &[NavigationSection] {
        &self.navigation
    }

    /// Navigation visible under `variant`.
    #[must_use]
    pub fn visible_navigation(&self, variant: Variant) -> Vec<NavigationSection> {
        filter_navigation(&self.navigation, variant)
    }

    /// Page shown for unknown paths.
    #[must_use]
    pub fn not_found_page(&self) -> &ContentPage {
        &self.not_found
    }
}

fn load_navigation(path: &Path) -> Result<Vec<NavigationSection>, ContentError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No navigation file, using empty navigation");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_yaml::from_str(&content).map_err(|source| ContentError::Navigation {
        path: path.to_path_buf(),
        source,
    })
}
