use crate::catalog::Catalog;
use crate::commands::{list, view, CmdMessage, CmdResult};
use crate::route::Route;
use crate::session::AdminSession;

/// Answer a storefront route from the catalog.
pub fn run(catalog: &Catalog, session: &AdminSession, route: &Route) -> CmdResult {
    match route {
        Route::Preview => list::all(catalog).with_heading("Featured Collections"),
        Route::Category(category) => list::by_category(catalog, category.as_str())
            .with_heading(Route::category_title(category)),
        Route::Product(id) => view::run(catalog, id),
        Route::Admin => {
            if session.is_logged_in() {
                list::all(catalog).with_heading("Admin")
            } else {
                let mut result = CmdResult::default().with_heading("Admin");
                result.add_message(CmdMessage::warning("Admin login required"));
                result
            }
        }
        Route::About => {
            let mut result = CmdResult::default().with_heading("About Us");
            result.add_message(CmdMessage::info(
                "Crafting quality furniture since 1995 for homes and offices.",
            ));
            result
        }
        Route::Unknown(path) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!("Page not found: {}", path)));
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::InMemoryStore;

    fn setup() -> (Catalog, AdminSession) {
        (
            Catalog::initialize(&InMemoryStore::new()),
            AdminSession::new("pw"),
        )
    }

    #[test]
    fn test_preview_lists_everything() {
        let (catalog, session) = setup();
        let res = run(&catalog, &session, &Route::parse("/"));
        assert_eq!(res.products.len(), catalog.len());
    }

    #[test]
    fn test_category_route() {
        let (catalog, session) = setup();
        let res = run(&catalog, &session, &Route::parse("/office-furniture"));
        assert_eq!(res.heading.as_deref(), Some("Office Furniture"));
        assert!(!res.products.is_empty());
        assert!(res.products.iter().all(|p| p.category.as_str() == "office"));
    }

    #[test]
    fn test_product_route() {
        let (catalog, session) = setup();
        let res = run(&catalog, &session, &Route::parse("/product/h3"));
        assert_eq!(res.products[0].id, "h3");

        let res = run(&catalog, &session, &Route::parse("/product/x9"));
        assert!(res.products.is_empty());
    }

    #[test]
    fn test_admin_route_is_gated() {
        let (catalog, mut session) = setup();
        let res = run(&catalog, &session, &Route::Admin);
        assert!(res.products.is_empty());
        assert!(res.has_level(MessageLevel::Warning));

        session.authenticate("pw");
        let res = run(&catalog, &session, &Route::Admin);
        assert_eq!(res.products.len(), catalog.len());
    }

    #[test]
    fn test_about_route() {
        let (catalog, session) = setup();
        let res = run(&catalog, &session, &Route::parse("/about"));
        assert_eq!(res.heading.as_deref(), Some("About Us"));
        assert!(res.products.is_empty());
        assert!(res.has_level(MessageLevel::Info));
    }

    #[test]
    fn test_unknown_route_reports_page_not_found() {
        let (catalog, session) = setup();
        let res = run(&catalog, &session, &Route::parse("/cart"));
        assert!(res.heading.is_none());
        assert!(res.products.is_empty());
        assert_eq!(res.messages.len(), 1);
        assert_eq!(res.messages[0].level, MessageLevel::Info);
        assert_eq!(res.messages[0].content, "Page not found: /cart");
    }
}
