// ============================================================================
// vlib-core/src/service/memory.rs
// ============================================================================
//
// IN-MEMORY SERVICE: LibraryService backed by plain vectors
//
// Used by tests to drive the finder and the copy command without a server.
// Copies are recorded so callers can assert on what was (or was not) sent,
// and the new item is added to the namespace like the server would do.
//
// AI-ASSISTANT-INFO: In-memory LibraryService for tests

// ---- Internal crate imports ----
use super::LibraryService;
use crate::context::OperationContext;
use crate::error::{CoreError, CoreResult};
use crate::model::{Item, ItemCopySpec, ItemFile, Library};

// ---- Standard library imports ----
use std::cell::RefCell;
use std::collections::HashMap;

/// A copy request received by [`InMemoryLibraryService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCopy {
    pub source_id: String,
    pub spec: ItemCopySpec,
    pub new_id: String,
}

#[derive(Debug, Default)]
pub struct InMemoryLibraryService {
    libraries: Vec<Library>,
    items: RefCell<Vec<Item>>,
    files: HashMap<String, Vec<ItemFile>>,
    copies: RefCell<Vec<RecordedCopy>>,
    copy_failure: Option<String>,
}

impl InMemoryLibraryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(mut self, library: Library) -> Self {
        self.libraries.push(library);
        self
    }

    pub fn with_item(self, item: Item) -> Self {
        self.items.borrow_mut().push(item);
        self
    }

    pub fn with_file(mut self, item_id: &str, file: ItemFile) -> Self {
        self.files.entry(item_id.to_string()).or_default().push(file);
        self
    }

    /// Makes every copy call fail with an API error carrying `message`.
    pub fn with_copy_failure(mut self, message: &str) -> Self {
        self.copy_failure = Some(message.to_string());
        self
    }

    pub fn copies(&self) -> Vec<RecordedCopy> {
        self.copies.borrow().clone()
    }

    pub fn items(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }
}

impl LibraryService for InMemoryLibraryService {
    fn list_libraries(&self, ctx: &OperationContext) -> CoreResult<Vec<Library>> {
        ctx.check()?;
        Ok(self.libraries.clone())
    }

    fn list_items(&self, ctx: &OperationContext, library_id: &str) -> CoreResult<Vec<Item>> {
        ctx.check()?;
        Ok(self
            .items
            .borrow()
            .iter()
            .filter(|item| item.library_id == library_id)
            .cloned()
            .collect())
    }

    fn list_files(&self, ctx: &OperationContext, item_id: &str) -> CoreResult<Vec<ItemFile>> {
        ctx.check()?;
        Ok(self.files.get(item_id).cloned().unwrap_or_default())
    }

    fn copy_item(
        &self,
        ctx: &OperationContext,
        source: &Item,
        spec: &ItemCopySpec,
    ) -> CoreResult<String> {
        ctx.check()?;
        if let Some(message) = &self.copy_failure {
            return Err(CoreError::Api {
                status: 500,
                message: message.clone(),
            });
        }

        let library_id = spec
            .library_id
            .clone()
            .unwrap_or_else(|| source.library_id.clone());
        if !self.libraries.iter().any(|library| library.id == library_id) {
            return Err(CoreError::Api {
                status: 404,
                message: format!("library {} not found", library_id),
            });
        }

        let new_id = format!("{}-copy-{}", source.id, self.copies.borrow().len() + 1);
        let copy = Item {
            id: new_id.clone(),
            library_id,
            name: spec.name.clone().unwrap_or_else(|| source.name.clone()),
            description: spec.description.clone().or_else(|| source.description.clone()),
            source_id: Some(source.id.clone()),
            ..source.clone()
        };
        self.items.borrow_mut().push(copy);
        self.copies.borrow_mut().push(RecordedCopy {
            source_id: source.id.clone(),
            spec: spec.clone(),
            new_id: new_id.clone(),
        });
        Ok(new_id)
    }
}
