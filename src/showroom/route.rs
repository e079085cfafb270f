//! Logical storefront routes, as seen by the catalog.

use crate::model::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: full catalog preview.
    Preview,
    /// `/home-furniture`, `/office-furniture`.
    Category(Category),
    /// `/product/{id}`.
    Product(String),
    /// `/admin`.
    Admin,
    /// `/about`.
    About,
    Unknown(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');

        match normalized {
            "" => Route::Preview,
            "/home-furniture" => Route::Category(Category::home()),
            "/office-furniture" => Route::Category(Category::office()),
            "/admin" => Route::Admin,
            "/about" => Route::About,
            other => match other.strip_prefix("/product/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Product(id.to_string()),
                _ => Route::Unknown(trimmed.to_string()),
            },
        }
    }

    /// Page heading for category routes.
    pub fn category_title(category: &Category) -> String {
        let name = category.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{} Furniture", first.to_uppercase(), chars.as_str()),
            None => "Furniture".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Preview);
        assert_eq!(Route::parse(""), Route::Preview);
        assert_eq!(
            Route::parse("/home-furniture"),
            Route::Category(Category::home())
        );
        assert_eq!(
            Route::parse("/office-furniture/"),
            Route::Category(Category::office())
        );
        assert_eq!(Route::parse("/product/h3"), Route::Product("h3".into()));
        assert_eq!(Route::parse("/admin"), Route::Admin);
        assert_eq!(Route::parse("/about"), Route::About);
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(Route::parse("/product/"), Route::Unknown("/product/".into()));
        assert_eq!(
            Route::parse("/product/h3/reviews"),
            Route::Unknown("/product/h3/reviews".into())
        );
        assert_eq!(Route::parse("/cart"), Route::Unknown("/cart".into()));
    }

    #[test]
    fn test_category_title() {
        assert_eq!(Route::category_title(&Category::home()), "Home Furniture");
        assert_eq!(Route::category_title(&Category::office()), "Office Furniture");
    }
}
