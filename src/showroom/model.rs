//! Core catalog types.
//!
//! [`Product`] is the only entity. Its serialized form (camelCase JSON) is the
//! persisted layout, so field renames here are storage format changes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag. The set is open: any string is a valid category, the two
/// constants are the ones the storefront routes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub const HOME: &'static str = "home";
    pub const OFFICE: &'static str = "office";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn home() -> Self {
        Self::new(Self::HOME)
    }

    pub fn office() -> Self {
        Self::new(Self::OFFICE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub code: String,
    pub category: Category,
    pub title: String,
    pub description: String,
    /// Whole currency units.
    pub price: u64,
    pub image_folder: String,
    pub image_name: String,
}

impl Product {
    pub fn image_path(&self) -> String {
        format!("/images/{}/{}", self.image_folder, self.image_name)
    }

    /// Overlay the fields set in `update`, keeping the rest.
    pub fn apply(&mut self, update: &ProductUpdate) {
        if let Some(code) = &update.code {
            self.code = code.clone();
        }
        if let Some(category) = &update.category {
            self.category = category.clone();
        }
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(folder) = &update.image_folder {
            self.image_folder = folder.clone();
        }
        if let Some(name) = &update.image_name {
            self.image_name = name.clone();
        }
    }
}

/// Partial product used by the admin update path. There is no `id` field:
/// identifiers never change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub code: Option<String>,
    pub category: Option<Category>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub image_folder: Option<String>,
    pub image_name: Option<String>,
}

impl ProductUpdate {
    pub fn price(price: u64) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub group_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "Rs.".to_string(),
            group_separator: ',',
        }
    }
}

/// Render a price with digit grouping, e.g. `Rs. 35,000`.
pub fn format_price(price: u64, format: &CurrencyFormat) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(format.group_separator);
        }
        grouped.push(c);
    }

    if format.symbol.is_empty() {
        grouped
    } else {
        format!("{} {}", format.symbol, grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: "h3".into(),
            code: "JO-H-003".into(),
            category: Category::home(),
            title: "Minimalist Walnut Coffee Table".into(),
            description: "Walnut top".into(),
            price: 35000,
            image_folder: "home".into(),
            image_name: "coffee-table.jpeg".into(),
        }
    }

    #[test]
    fn test_apply_overrides_only_given_fields() {
        let mut product = sample();
        product.apply(&ProductUpdate::price(30000));

        assert_eq!(product.price, 30000);
        assert_eq!(product.title, "Minimalist Walnut Coffee Table");
        assert_eq!(product.code, "JO-H-003");
    }

    #[test]
    fn test_empty_update() {
        assert!(ProductUpdate::default().is_empty());
        assert!(!ProductUpdate::price(1).is_empty());
    }

    #[test]
    fn test_image_path() {
        assert_eq!(sample().image_path(), "/images/home/coffee-table.jpeg");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["imageFolder"], "home");
        assert_eq!(json["imageName"], "coffee-table.jpeg");
        assert_eq!(json["category"], "home");
    }

    #[test]
    fn test_format_price() {
        let fmt = CurrencyFormat::default();
        assert_eq!(format_price(0, &fmt), "Rs. 0");
        assert_eq!(format_price(999, &fmt), "Rs. 999");
        assert_eq!(format_price(35000, &fmt), "Rs. 35,000");
        assert_eq!(format_price(1234567, &fmt), "Rs. 1,234,567");

        let bare = CurrencyFormat {
            symbol: String::new(),
            group_separator: '.',
        };
        assert_eq!(format_price(185000, &bare), "185.000");
    }
}
