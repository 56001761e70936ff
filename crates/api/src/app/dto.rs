use showcase_core::Entity;
use showcase_products::{Product, url};

use crate::app::services::ProductListing;

/// Page that product listing URLs point at.
pub const PRODUCTS_PAGE_PATH: &str = "/products";

// -------------------------
// Request DTOs
// -------------------------

/// Query parameters of `GET /api/products`.
///
/// A non-blank `id` selects a single product and the other parameters are ignored.
/// Repeated parameters keep their first value, the same rule `url::decode` applies
/// to shared links.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListProductsQuery {
    pub id: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ListProductsQuery {
    pub const ID_PARAM: &'static str = "id";
    pub const SEARCH_PARAM: &'static str = "search";

    /// Parse the raw query string of a request (without the leading `?`).
    pub fn from_query(raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or_default();
        Self {
            id: url::find_param(raw, Self::ID_PARAM),
            category: url::find_param(raw, url::CATEGORY_PARAM),
            search: url::find_param(raw, Self::SEARCH_PARAM),
        }
    }

    /// The `id` parameter, if present and not blank.
    pub fn product_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id().as_str(),
        "name": product.name(),
        "price": product.price().as_decimal(),
        "priceDisplay": product.price().display(),
        "category": product.category(),
        "brand": product.brand(),
        "description": product.description(),
        "image": product.image(),
        "features": product.features(),
        "specifications": product.specifications(),
        "inStock": product.in_stock(),
        "rating": product.rating().as_f64(),
        "reviews": product.reviews(),
    })
}

pub fn listing_to_json(listing: &ProductListing) -> serde_json::Value {
    serde_json::json!({
        "products": listing.products.iter().map(product_to_json).collect::<Vec<_>>(),
        "categories": listing.categories,
        "total": listing.total(),
        "query": {
            "category": listing.query.category.label(),
            "search": listing.query.search,
            "href": url::encode(PRODUCTS_PAGE_PATH, &listing.query),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_parameters_keep_the_first_value() {
        let q = ListProductsQuery::from_query(Some("category=Office&category=Kitchen&search=a&search=b"));
        assert_eq!(q.category.as_deref(), Some("Office"));
        assert_eq!(q.search.as_deref(), Some("a"));
        assert_eq!(q.id, None);
    }

    #[test]
    fn missing_query_string_is_empty() {
        assert_eq!(ListProductsQuery::from_query(None), ListProductsQuery::default());
    }

    #[test]
    fn blank_id_is_ignored() {
        let q = ListProductsQuery::from_query(Some("id=%20&category=Kitchen"));
        assert_eq!(q.product_id(), None);
        let q = ListProductsQuery::from_query(Some("id=3"));
        assert_eq!(q.product_id(), Some("3"));
    }
}
