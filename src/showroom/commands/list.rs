use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};

pub fn all(catalog: &Catalog) -> CmdResult {
    CmdResult::default().with_products(catalog.products())
}

pub fn by_category(catalog: &Catalog, category: &str) -> CmdResult {
    let products = catalog.query_by_category(category);
    let mut result = CmdResult::default().with_products(products);
    if result.products.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products in category '{}'.",
            category
        )));
    }
    result
}

pub fn categories(catalog: &Catalog) -> CmdResult {
    CmdResult::default().with_categories(catalog.categories())
}
