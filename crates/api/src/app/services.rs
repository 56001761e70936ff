use std::sync::Arc;

use showcase_core::{CatalogResult, ProductId};
use showcase_products::{CatalogStore, CategoryFilter, Product, QueryState};

/// Result of a list/filter query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListing {
    pub query: QueryState,
    pub products: Vec<Product>,
    pub categories: Vec<CategoryFilter>,
}

impl ProductListing {
    pub fn total(&self) -> usize {
        self.products.len()
    }
}

/// Catalog operations exposed to HTTP handlers.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn CatalogStore>,
    featured_limit: usize,
}

impl AppServices {
    pub fn new(store: Arc<dyn CatalogStore>, featured_limit: usize) -> Self {
        Self {
            store,
            featured_limit,
        }
    }

    /// Single product by id. Filters never apply here.
    pub fn products_get(&self, id: &ProductId) -> CatalogResult<Product> {
        self.store.get(id)
    }

    /// Resolve `query` against the catalog.
    ///
    /// A known category narrows the store lookup first; the resolver still applies
    /// both predicates, so the result is the same either way.
    pub fn products_list(&self, query: &QueryState) -> CatalogResult<ProductListing> {
        let base = match &query.category {
            CategoryFilter::Known(category) => self.store.list_by_category(*category)?,
            CategoryFilter::All | CategoryFilter::Unrecognized(_) => self.store.list()?,
        };

        let products = query.resolve(&base).into_iter().cloned().collect();

        Ok(ProductListing {
            query: query.clone(),
            products,
            categories: self.store.categories(),
        })
    }

    pub fn products_featured(&self) -> CatalogResult<Vec<Product>> {
        self.store.featured(self.featured_limit)
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        self.store.categories()
    }
}
