//! Normalized page registry

use super::descriptor::{PageDescriptor, PageName, RawPage};
use tracing::{debug, warn};

/// Make a page url absolute by prepending `/` when it is missing.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{}", url)
    }
}

/// Ordered list of declared pages.
///
/// Every entry's url starts with `/` and names are unique. Lookups are a
/// linear scan, which is all the page counts of a mini-program ever need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRegistry {
    pages: Vec<PageDescriptor>,
}

impl PageRegistry {
    /// Build a registry from raw declarations.
    ///
    /// An absent declaration list yields an empty registry. When a name is
    /// declared twice the first declaration wins.
    pub fn normalize(raw: Option<&[RawPage]>) -> Self {
        let Some(raw) = raw else {
            debug!("No pages declared, starting with an empty registry");
            return Self::default();
        };

        let mut pages: Vec<PageDescriptor> = Vec::with_capacity(raw.len());
        for entry in raw {
            if pages.iter().any(|page| page.name.as_str() == entry.name) {
                warn!(page = %entry.name, "Duplicate page declaration ignored");
                continue;
            }
            pages.push(PageDescriptor {
                name: PageName::new(entry.name.clone()),
                url: normalize_url(&entry.url),
            });
        }

        debug!("Registered {} pages", pages.len());
        Self { pages }
    }

    /// Find a page by exact name
    pub fn find(&self, name: &str) -> Option<&PageDescriptor> {
        self.pages.iter().find(|page| page.name.as_str() == name)
    }

    /// Find a page by its absolute url
    pub fn find_by_url(&self, url: &str) -> Option<&PageDescriptor> {
        self.pages.iter().find(|page| page.url == url)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.pages.iter()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Turn the registry back into raw declarations
    pub fn to_raw(&self) -> Vec<RawPage> {
        self.pages
            .iter()
            .map(|page| RawPage::new(page.name.as_str(), page.url.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a PageRegistry {
    type Item = &'a PageDescriptor;
    type IntoIter = std::slice::Iter<'a, PageDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
