//! Query resolution: category + free-text filters over an ordered product list.
//!
//! Every function here is a pure function of its inputs. Filters are stable: they
//! return a subsequence of the input, never a re-sort.

use showcase_core::{CatalogError, CatalogResult, Entity, ProductId};

use crate::category::CategoryFilter;
use crate::product::Product;
use crate::url;

/// What the client is currently looking at: (category filter, search text).
///
/// Defaults to no category filter and empty search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub category: CategoryFilter,
    pub search: String,
}

impl QueryState {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Build from raw request parameters; absent values take the defaults.
    pub fn from_params(category: Option<&str>, search: Option<&str>) -> Self {
        Self::new(CategoryFilter::parse(category), search.unwrap_or_default())
    }

    pub fn with_category(&self, category: CategoryFilter) -> Self {
        Self::new(category, self.search.clone())
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self::new(self.category.clone(), search)
    }

    /// Select a category and return the new state with the canonical URL for it.
    ///
    /// Selecting `All` yields `path` with no query string at all.
    pub fn select_category(&self, category: CategoryFilter, path: &str) -> (Self, String) {
        let next = self.with_category(category);
        let href = url::encode(path, &next);
        (next, href)
    }

    /// Apply this query to `products`.
    pub fn resolve<'a, I>(&self, products: I) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        resolve(products, &self.category, &self.search)
    }
}

/// Keep products whose category passes `category`. `All` is the identity filter.
pub fn filter_by_category<'a, I>(products: I, category: &CategoryFilter) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| category.matches(p.category()))
        .collect()
}

/// Keep products where `text` is a case-insensitive substring of the name,
/// description, category, or brand. Blank text is the identity filter.
pub fn filter_by_search<'a, I>(products: I, text: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    if text.trim().is_empty() {
        return products.into_iter().collect();
    }

    let needle = text.to_lowercase();
    products
        .into_iter()
        .filter(|p| matches_search(p, &needle))
        .collect()
}

fn matches_search(product: &Product, needle: &str) -> bool {
    product
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Both filters, AND semantics: category first, then search.
pub fn resolve<'a, I>(products: I, category: &CategoryFilter, text: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    filter_by_search(filter_by_category(products, category), text)
}

/// Direct lookup by identifier. No category or search filter applies.
pub fn get_by_id<'a, I>(products: I, id: &ProductId) -> CatalogResult<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .find(|p| p.has_id(id))
        .ok_or_else(|| CatalogError::not_found(id.clone()))
}
