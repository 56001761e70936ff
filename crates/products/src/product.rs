use std::collections::BTreeMap;

use showcase_core::{CatalogError, CatalogResult, Entity, ProductId, ValueObject};

use crate::category::Category;

/// Price in the smallest currency unit (cents). Two-decimal currency semantics.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Decimal amount (e.g. `199.99`), for wire formats that expect a number.
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Human-readable amount, always with two decimals (`$199.99`).
    pub fn display(&self) -> String {
        format!("${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl ValueObject for Price {}

/// Average review score on a 0.0–5.0 scale, stored in tenths.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MAX_TENTHS: u8 = 50;

    pub fn from_tenths(tenths: u8) -> CatalogResult<Self> {
        if tenths > Self::MAX_TENTHS {
            return Err(CatalogError::invariant(format!(
                "rating must be within 0.0-5.0 (got {}.{})",
                tenths / 10,
                tenths % 10
            )));
        }
        Ok(Self(tenths))
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl ValueObject for Rating {}

/// Input for building a catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub brand: String,
    pub description: String,
    pub image: String,
    pub features: Vec<String>,
    pub specifications: BTreeMap<String, String>,
    pub in_stock: bool,
    pub rating: Rating,
    pub reviews: u32,
}

/// Catalog product. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    category: Category,
    brand: String,
    description: String,
    image: String,
    features: Vec<String>,
    specifications: BTreeMap<String, String>,
    in_stock: bool,
    rating: Rating,
    reviews: u32,
}

impl Product {
    pub fn new(input: NewProduct) -> CatalogResult<Self> {
        if input.name.trim().is_empty() {
            return Err(CatalogError::invariant(format!(
                "product {} must have a name",
                input.id
            )));
        }

        Ok(Self {
            id: input.id,
            name: input.name,
            price: input.price,
            category: input.category,
            brand: input.brand,
            description: input.description,
            image: input.image,
            features: input.features,
            specifications: input.specifications,
            in_stock: input.in_stock,
            rating: input.rating,
            reviews: input.reviews,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Primary image reference (URL).
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Specification label -> value.
    pub fn specifications(&self) -> &BTreeMap<String, String> {
        &self.specifications
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn reviews(&self) -> u32 {
        self.reviews
    }

    /// Whether the product can be added to a cart (must be in stock).
    pub fn is_purchasable(&self) -> bool {
        self.in_stock
    }

    /// Fields that free-text search looks at.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.description.as_str(),
            self.category.as_str(),
            self.brand.as_str(),
        ]
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
