// ============================================================================
// vlib-core/src/copy.rs
// ============================================================================
//
// ITEM COPY: Resolve a source item and a destination library, then copy
//
// The copy is strictly sequential. Each path must resolve to exactly one
// object of the expected kind; any other outcome aborts before the copy
// call is made. Nothing is retried and nothing is rolled back, since the
// copy itself is a single remote operation.
//
// KEY COMPONENTS:
// - CopyRequest: source path, destination path, optional new name
// - require_single: cardinality check on finder results
// - build_copy_spec: destination parameters, including the name default
// - copy_library_item: the full operation
//
// AI-ASSISTANT-INFO: library.cp orchestration

// ---- Internal crate imports ----
use crate::context::OperationContext;
use crate::error::{CoreError, CoreResult};
use crate::finder::{FindResult, Finder, ObjectKind};
use crate::model::{Item, ItemCopySpec, Library};
use crate::service::LibraryService;

// ---- External crate imports ----
use log::{debug, info};

/// Parameters of a single `library.cp` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    /// Path of the item to copy
    pub source: String,
    /// Path of the library receiving the copy
    pub destination: String,
    /// Name for the copy; the source item's name when unset
    pub name: Option<String>,
}

impl CopyRequest {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Resolves `path` and insists on exactly one result.
///
/// A finder `NoMatch` counts as zero results, so a missing object and an
/// ambiguous one fail the same way. `expected` only labels the error; the
/// kind of the single result is checked by the caller.
pub fn require_single<S: LibraryService + ?Sized>(
    finder: &Finder<'_, S>,
    ctx: &OperationContext,
    path: &str,
    expected: ObjectKind,
) -> CoreResult<FindResult> {
    let mut results = match finder.find(ctx, path) {
        Ok(results) => results,
        Err(CoreError::NoMatch { .. }) => Vec::new(),
        Err(e) => return Err(e),
    };

    if results.len() != 1 {
        return Err(CoreError::AmbiguousMatch {
            kind: expected.label().to_string(),
            path: path.to_string(),
            count: results.len(),
        });
    }
    Ok(results.remove(0))
}

/// Resolves `path` to exactly one library item.
pub fn resolve_item<S: LibraryService + ?Sized>(
    finder: &Finder<'_, S>,
    ctx: &OperationContext,
    path: &str,
) -> CoreResult<Item> {
    let result = require_single(finder, ctx, path, ObjectKind::Item)?;
    let actual = result.kind();
    result.object.into_item().ok_or_else(|| CoreError::WrongKind {
        path: path.to_string(),
        actual: actual.label().to_string(),
    })
}

/// Resolves `path` to exactly one library.
pub fn resolve_library<S: LibraryService + ?Sized>(
    finder: &Finder<'_, S>,
    ctx: &OperationContext,
    path: &str,
) -> CoreResult<Library> {
    let result = require_single(finder, ctx, path, ObjectKind::Library)?;
    let actual = result.kind();
    result.object.into_library().ok_or_else(|| CoreError::WrongKind {
        path: path.to_string(),
        actual: actual.label().to_string(),
    })
}

/// Destination parameters for copying `source` into `destination`.
///
/// An empty `name` is treated like no name at all.
pub fn build_copy_spec(source: &Item, destination: &Library, name: Option<&str>) -> ItemCopySpec {
    let name = match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => source.name.clone(),
    };
    ItemCopySpec {
        name: Some(name),
        library_id: Some(destination.id.clone()),
        description: None,
    }
}

/// Copies the item at `request.source` into the library at
/// `request.destination` and returns the new item's id.
///
/// # Returns
///
/// * `Ok(String)` - Id of the new item
/// * `Err(CoreError::AmbiguousMatch)` - A path matched zero or several objects
/// * `Err(CoreError::WrongKind)` - A path matched one object of the wrong kind
/// * Any finder or service error, unchanged
pub fn copy_library_item<S: LibraryService + ?Sized>(
    ctx: &OperationContext,
    service: &S,
    request: &CopyRequest,
) -> CoreResult<String> {
    let finder = Finder::new(service);

    let source = resolve_item(&finder, ctx, &request.source)?;
    debug!("Source {} resolved to item {}", request.source, source.id);

    let destination = resolve_library(&finder, ctx, &request.destination)?;
    debug!(
        "Destination {} resolved to library {}",
        request.destination, destination.id
    );

    let spec = build_copy_spec(&source, &destination, request.name.as_deref());
    let new_id = service.copy_item(ctx, &source, &spec)?;
    info!(
        "Copied item {} to library {} as {} ({})",
        source.id,
        destination.id,
        spec.name.as_deref().unwrap_or_default(),
        new_id
    );
    Ok(new_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::InMemoryLibraryService;

    #[test]
    fn name_defaults_to_source_name() {
        let source = Item::new("item-1", "lib-a", "item-X");
        let destination = Library::new("lib-b", "content-B");
        let spec = build_copy_spec(&source, &destination, None);
        assert_eq!(spec.name.as_deref(), Some("item-X"));
        assert_eq!(spec.library_id.as_deref(), Some("lib-b"));
    }

    #[test]
    fn explicit_name_overrides_source_name() {
        let source = Item::new("item-1", "lib-a", "item-X");
        let destination = Library::new("lib-b", "content-B");
        let spec = build_copy_spec(&source, &destination, Some("item-Y"));
        assert_eq!(spec.name.as_deref(), Some("item-Y"));
    }

    #[test]
    fn empty_name_counts_as_unset() {
        let source = Item::new("item-1", "lib-a", "item-X");
        let destination = Library::new("lib-b", "content-B");
        let spec = build_copy_spec(&source, &destination, Some(""));
        assert_eq!(spec.name.as_deref(), Some("item-X"));
    }

    #[test]
    fn require_single_folds_no_match_into_count_zero() {
        let service = InMemoryLibraryService::new().with_library(Library::new("lib-a", "content-A"));
        let finder = Finder::new(&service);
        let err = require_single(&finder, &OperationContext::new(), "/nope", ObjectKind::Library)
            .unwrap_err();
        match err {
            CoreError::AmbiguousMatch { kind, path, count } => {
                assert_eq!(kind, "library");
                assert_eq!(path, "/nope");
                assert_eq!(count, 0);
            }
            other => panic!("Unexpected error type: {:?}", other),
        }
    }

    #[test]
    fn require_single_passes_through_invalid_path() {
        let service = InMemoryLibraryService::new();
        let finder = Finder::new(&service);
        let err = require_single(&finder, &OperationContext::new(), "/a/b/c/d", ObjectKind::Item)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidPath(_)));
    }
}
