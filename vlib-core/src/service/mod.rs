//! Content library service abstraction.
//!
//! The finder and the copy command only talk to the content library through
//! [`LibraryService`], so the REST backend can be swapped for the in-memory
//! one in tests.
mod memory;
mod rest;

pub use memory::{InMemoryLibraryService, RecordedCopy};
pub use rest::RestLibraryService;

use crate::context::OperationContext;
use crate::error::CoreResult;
use crate::model::{Item, ItemCopySpec, ItemFile, Library};

/// Read access to libraries, items and files, plus the item copy call.
///
/// Implementations are expected to call `ctx.check()` before doing any
/// blocking work.
pub trait LibraryService {
    /// Every library visible to the session, in server order.
    fn list_libraries(&self, ctx: &OperationContext) -> CoreResult<Vec<Library>>;

    /// Items owned by `library_id`, in server order.
    fn list_items(&self, ctx: &OperationContext, library_id: &str) -> CoreResult<Vec<Item>>;

    /// Files stored in `item_id`.
    fn list_files(&self, ctx: &OperationContext, item_id: &str) -> CoreResult<Vec<ItemFile>>;

    /// Copies `source` using the destination parameters in `spec` and
    /// returns the id of the new item.
    fn copy_item(
        &self,
        ctx: &OperationContext,
        source: &Item,
        spec: &ItemCopySpec,
    ) -> CoreResult<String>;
}
