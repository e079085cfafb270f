use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(catalog: &Catalog, id: &str) -> CmdResult {
    match catalog.query_by_id(id) {
        Some(product) => CmdResult::default().with_products([product]),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!("Product not found: {}", id)));
            result
        }
    }
}
