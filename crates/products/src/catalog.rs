//! Catalog store: the canonical product set and its point queries.

use std::collections::HashMap;
use std::sync::Arc;

use showcase_core::{CatalogError, CatalogResult, Entity, ProductId};

use crate::category::{Category, CategoryFilter};
use crate::product::Product;
use crate::seed;

/// Read-only access to the product catalog.
///
/// Lookups that can legitimately miss return `CatalogError::NotFound`; any other
/// error is a store fault (`CatalogError::Internal`).
pub trait CatalogStore: Send + Sync {
    /// Single product by identifier.
    fn get(&self, id: &ProductId) -> CatalogResult<Product>;

    /// Every product, in seed (insertion) order.
    fn list(&self) -> CatalogResult<Vec<Product>>;

    /// Products of one category, in seed order.
    fn list_by_category(&self, category: Category) -> CatalogResult<Vec<Product>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|p| p.category() == category)
            .collect())
    }

    /// The fixed category enumeration, `All` first.
    fn categories(&self) -> Vec<CategoryFilter> {
        CategoryFilter::enumeration()
    }

    /// The first `limit` products in seed order (homepage highlights).
    fn featured(&self, limit: usize) -> CatalogResult<Vec<Product>> {
        Ok(self.list()?.into_iter().take(limit).collect())
    }
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn get(&self, id: &ProductId) -> CatalogResult<Product> {
        (**self).get(id)
    }

    fn list(&self) -> CatalogResult<Vec<Product>> {
        (**self).list()
    }

    fn list_by_category(&self, category: Category) -> CatalogResult<Vec<Product>> {
        (**self).list_by_category(category)
    }

    fn categories(&self) -> Vec<CategoryFilter> {
        (**self).categories()
    }

    fn featured(&self, limit: usize) -> CatalogResult<Vec<Product>> {
        (**self).featured(limit)
    }
}

/// In-memory, immutable catalog.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog, checking that identifiers are unique.
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if index.insert(product.id().clone(), pos).is_some() {
                return Err(CatalogError::invariant(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
        }
        Ok(Self { products, index })
    }

    /// The built-in showcase catalog.
    pub fn seeded() -> CatalogResult<Self> {
        Self::new(seed::seed_products()?)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn get(&self, id: &ProductId) -> CatalogResult<Product> {
        self.index
            .get(id)
            .map(|&pos| self.products[pos].clone())
            .ok_or_else(|| CatalogError::not_found(id.clone()))
    }

    fn list(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{NewProduct, Price, Rating};

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    fn product(id_: &str, category: Category) -> Product {
        Product::new(NewProduct {
            id: id(id_),
            name: format!("Product {id_}"),
            price: Price::from_cents(100),
            category,
            brand: "Brand".to_string(),
            description: String::new(),
            image: String::new(),
            features: Vec::new(),
            specifications: Default::default(),
            in_stock: true,
            rating: Rating::from_tenths(40).unwrap(),
            reviews: 0,
        })
        .unwrap()
    }

    #[test]
    fn get_returns_the_matching_product() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let product = catalog.get(&id("6")).unwrap();
        assert_eq!(product.name(), "Portable Coffee Maker");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let err = catalog.get(&id("999")).unwrap_err();
        assert_eq!(err, CatalogError::NotFound(id("999")));
    }

    #[test]
    fn list_preserves_seed_order_and_is_repeatable() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let first = catalog.list().unwrap();
        let second = catalog.list().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_slice(), catalog.products());
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn list_by_category_keeps_order() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let ids: Vec<String> = catalog
            .list_by_category(Category::Electronics)
            .unwrap()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn a_category_may_have_no_products() {
        let catalog = InMemoryCatalog::new(vec![product("a", Category::Office)]).unwrap();
        assert!(catalog.list_by_category(Category::Kitchen).unwrap().is_empty());
        assert!(
            catalog
                .categories()
                .contains(&CategoryFilter::Known(Category::Kitchen))
        );
    }

    #[test]
    fn categories_are_fixed_and_start_with_all() {
        let catalog = InMemoryCatalog::new(Vec::new()).unwrap();
        let categories = catalog.categories();
        assert_eq!(categories.first(), Some(&CategoryFilter::All));
        assert_eq!(categories.len(), 6);
        assert!(catalog.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = InMemoryCatalog::new(vec![
            product("a", Category::Office),
            product("a", Category::Kitchen),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvariantViolation(_)));
    }

    #[test]
    fn featured_takes_the_leading_products() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let names: Vec<String> = catalog
            .featured(3)
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "Wireless Bluetooth Headphones",
                "Smartphone Camera Lens Kit",
                "Ergonomic Office Chair"
            ]
        );
        assert_eq!(catalog.featured(100).unwrap().len(), 6);
    }

    #[test]
    fn works_behind_an_arc_trait_object() {
        let store: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalog::seeded().unwrap());
        assert_eq!(store.list().unwrap().len(), 6);
        assert!(store.get(&id("1")).is_ok());
    }
}
