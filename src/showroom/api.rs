//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the
//! composition root of the catalog: it owns the [`Catalog`], the
//! [`ProductStore`] it was seeded from, the [`AdminSession`] and the
//! configuration. Views borrow it; nothing else holds catalog state.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Routes mutations** through the admin session
//! - **Returns structured types** (`CmdResult`), never strings for a terminal
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `ShowroomApi<FsBackend>`
//! - Testing: `ShowroomApi<MemBackend>`

use crate::catalog::{Catalog, Seed};
use crate::commands;
use crate::config::ShowroomConfig;
use crate::error::Result;
use crate::model::{CurrencyFormat, ProductUpdate};
use crate::route::Route;
use crate::session::AdminSession;
use crate::store::backend::StorageBackend;
use crate::store::product_store::ProductStore;

pub struct ShowroomApi<B: StorageBackend> {
    store: ProductStore<B>,
    catalog: Catalog,
    session: AdminSession,
    config: ShowroomConfig,
}

impl<B: StorageBackend> ShowroomApi<B> {
    /// Seed the catalog from `store` (or the defaults) and start logged out.
    pub fn new(store: ProductStore<B>, config: ShowroomConfig) -> Self {
        let catalog = Catalog::initialize(&store);
        let session = AdminSession::new(config.admin_password.clone());
        Self {
            store,
            catalog,
            session,
            config,
        }
    }

    pub fn list_products(&self) -> commands::CmdResult {
        commands::list::all(&self.catalog)
    }

    pub fn products_in_category(&self, category: &str) -> commands::CmdResult {
        commands::list::by_category(&self.catalog, category)
    }

    pub fn categories(&self) -> commands::CmdResult {
        commands::list::categories(&self.catalog)
    }

    pub fn get_product(&self, id: &str) -> commands::CmdResult {
        commands::view::run(&self.catalog, id)
    }

    pub fn resolve(&self, route: &Route) -> commands::CmdResult {
        commands::resolve::run(&self.catalog, &self.session, route)
    }

    pub fn login(&mut self, candidate: &str) -> commands::CmdResult {
        commands::login::run(&mut self.session, candidate)
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Update a product. Strict mode comes from config unless `strict` forces it.
    pub fn update_product(
        &mut self,
        id: &str,
        update: &ProductUpdate,
        strict: bool,
    ) -> Result<commands::CmdResult> {
        let policy = if strict || self.config.strict_updates {
            MissPolicy::Strict
        } else {
            MissPolicy::Lenient
        };
        commands::update::run(
            &mut self.catalog,
            &self.store,
            &self.session,
            id,
            update,
            policy,
        )
    }

    pub fn seed(&self) -> Seed {
        self.catalog.seed()
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        self.config.currency_format()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::update::MissPolicy;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
