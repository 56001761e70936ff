use core::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use showcase_core::{CatalogError, ValueObject};

/// Label of the "no filter" sentinel.
pub const ALL_LABEL: &str = "All";

/// Closed set of product categories.
///
/// This is fixed data, not derived from the product list: a category may have zero
/// products.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Photography,
    Furniture,
    Office,
    Kitchen,
}

impl Category {
    /// Every known category, in display order.
    pub const KNOWN: [Category; 5] = [
        Category::Electronics,
        Category::Photography,
        Category::Furniture,
        Category::Office,
        Category::Kitchen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Photography => "Photography",
            Category::Furniture => "Furniture",
            Category::Office => "Office",
            Category::Kitchen => "Kitchen",
        }
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Case-insensitive parse of a category label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::KNOWN
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CatalogError::invalid_category(s))
    }
}

/// The category half of a query: either no filter, a known category, or a label
/// that names no known category.
///
/// Unrecognized labels are kept rather than rejected: they degrade to a filter that
/// matches nothing, and still round-trip through a URL unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Known(Category),
    Unrecognized(String),
}

impl CategoryFilter {
    /// Interpret an externally supplied category parameter.
    ///
    /// Absent, blank, and `"All"` (any case) all mean "no filter".
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return CategoryFilter::All;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_LABEL) {
            return CategoryFilter::All;
        }

        match trimmed.parse::<Category>() {
            Ok(category) => CategoryFilter::Known(category),
            Err(err) => {
                tracing::debug!(error = %err, "category filter degraded to empty match");
                CategoryFilter::Unrecognized(raw.to_string())
            }
        }
    }

    /// The fixed category enumeration offered to clients, `All` first.
    pub fn enumeration() -> Vec<CategoryFilter> {
        core::iter::once(CategoryFilter::All)
            .chain(Category::KNOWN.into_iter().map(CategoryFilter::Known))
            .collect()
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Whether a product of `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Known(wanted) => *wanted == category,
            CategoryFilter::Unrecognized(_) => false,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Known(c) => c.as_str(),
            CategoryFilter::Unrecognized(raw) => raw,
        }
    }
}

impl ValueObject for CategoryFilter {}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        CategoryFilter::Known(value)
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_labels_case_insensitively() {
        assert_eq!("electronics".parse::<Category>().unwrap(), Category::Electronics);
        assert_eq!("KITCHEN".parse::<Category>().unwrap(), Category::Kitchen);
        assert_eq!(" Office ".parse::<Category>().unwrap(), Category::Office);
    }

    #[test]
    fn unknown_label_is_an_invalid_category() {
        let err = "Garden".parse::<Category>().unwrap_err();
        assert_eq!(err, CatalogError::InvalidCategory("Garden".to_string()));
    }

    #[test]
    fn absent_blank_and_all_mean_no_filter() {
        assert_eq!(CategoryFilter::parse(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("")), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("  ")), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("All")), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("all")), CategoryFilter::All);
    }

    #[test]
    fn unrecognized_label_degrades_to_empty_match() {
        let filter = CategoryFilter::parse(Some("Garden"));
        assert_eq!(filter, CategoryFilter::Unrecognized("Garden".to_string()));
        for category in Category::KNOWN {
            assert!(!filter.matches(category));
        }
        assert_eq!(filter.label(), "Garden");
    }

    #[test]
    fn known_filter_matches_only_its_category() {
        let filter = CategoryFilter::parse(Some("photography"));
        assert_eq!(filter, CategoryFilter::Known(Category::Photography));
        assert!(filter.matches(Category::Photography));
        assert!(!filter.matches(Category::Office));
    }

    #[test]
    fn enumeration_starts_with_all() {
        let labels: Vec<String> = CategoryFilter::enumeration()
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(
            labels,
            vec!["All", "Electronics", "Photography", "Furniture", "Office", "Kitchen"]
        );
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&CategoryFilter::enumeration()).unwrap();
        assert_eq!(
            json,
            r#"["All","Electronics","Photography","Furniture","Office","Kitchen"]"#
        );
    }
}
