use crate::catalog::{Catalog, UpdateOutcome};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShowroomError};
use crate::model::ProductUpdate;
use crate::session::AdminSession;
use crate::store::backend::StorageBackend;
use crate::store::product_store::ProductStore;

/// How an update to an unknown id is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissPolicy {
    /// Leave the catalog unchanged and say so.
    #[default]
    Lenient,
    /// Fail with [`ShowroomError::ProductNotFound`].
    Strict,
}

/// Apply `update` to product `id` and write the whole catalog through to the
/// store. A failed write is a warning: the in-memory catalog stays current.
pub fn run<B: StorageBackend>(
    catalog: &mut Catalog,
    store: &ProductStore<B>,
    session: &AdminSession,
    id: &str,
    update: &ProductUpdate,
    policy: MissPolicy,
) -> Result<CmdResult> {
    let grant = session.grant().ok_or(ShowroomError::Unauthorized)?;
    let mut result = CmdResult::default();

    let product = match catalog.update(&grant, id, update) {
        UpdateOutcome::Updated(product) => product,
        UpdateOutcome::Missed => {
            if policy == MissPolicy::Strict {
                return Err(ShowroomError::ProductNotFound(id.to_string()));
            }
            result.add_message(CmdMessage::info(format!(
                "No product with id {}, nothing updated",
                id
            )));
            return Ok(result);
        }
    };

    if update.is_empty() {
        result.add_message(CmdMessage::info(format!("Nothing to update for {}", id)));
        return Ok(result.with_products([&product]));
    }

    if let Err(e) = store.save(catalog.products()) {
        tracing::warn!(error = %e, "catalog update not persisted");
        result.add_message(CmdMessage::warning(format!(
            "Change applied but not saved: {}",
            e
        )));
    }

    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {}",
        product.id, product.title
    )));
    Ok(result.with_products([&product]))
}
