// ============================================================================
// vlib-core/src/finder/mod.rs
// ============================================================================
//
// FINDER: Resolves inventory paths to libraries, items and files
//
// A path is a `/`-separated list of names:
//
//   /                         every library
//   /<library>                libraries with that name
//   /<library>/<item>         items with that name in matching libraries
//   /<library>/<item>/<file>  files with that name in matching items
//
// Each segment is matched exactly (case-sensitive) unless it contains a glob
// metacharacter. Name collisions are not an error: every match is returned
// and the caller decides what to do with more than one.
//
// KEY COMPONENTS:
// - Finder: walks the namespace through a LibraryService
// - FindResult / ResolvedObject: kind-tagged results
//
// AI-ASSISTANT-INFO: Path resolution over the content library namespace

mod matcher;

pub use matcher::{SegmentMatcher, split_path};

// ---- Internal crate imports ----
use crate::context::OperationContext;
use crate::error::{CoreError, CoreResult};
use crate::model::{Item, ItemFile, Library};
use crate::service::LibraryService;

// ---- External crate imports ----
use log::debug;

// ---- Standard library imports ----
use std::fmt;

/// Deepest path the finder understands: library, item, file.
pub const MAX_PATH_DEPTH: usize = 3;

// ============================================================================
// RESULT TYPES
// ============================================================================

/// The kind of object a path resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Library,
    Item,
    File,
}

impl ObjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Library => "library",
            ObjectKind::Item => "library-item",
            ObjectKind::File => "library-item-file",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The object behind a resolved path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedObject {
    Library(Library),
    Item(Item),
    File(ItemFile),
}

impl ResolvedObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ResolvedObject::Library(_) => ObjectKind::Library,
            ResolvedObject::Item(_) => ObjectKind::Item,
            ResolvedObject::File(_) => ObjectKind::File,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ResolvedObject::Library(library) => &library.name,
            ResolvedObject::Item(item) => &item.name,
            ResolvedObject::File(file) => &file.name,
        }
    }

    /// Id of the object; files have no id of their own.
    pub fn id(&self) -> Option<&str> {
        match self {
            ResolvedObject::Library(library) => Some(&library.id),
            ResolvedObject::Item(item) => Some(&item.id),
            ResolvedObject::File(_) => None,
        }
    }

    pub fn as_library(&self) -> Option<&Library> {
        match self {
            ResolvedObject::Library(library) => Some(library),
            _ => None,
        }
    }

    pub fn as_item(&self) -> Option<&Item> {
        match self {
            ResolvedObject::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn into_library(self) -> Option<Library> {
        match self {
            ResolvedObject::Library(library) => Some(library),
            _ => None,
        }
    }

    pub fn into_item(self) -> Option<Item> {
        match self {
            ResolvedObject::Item(item) => Some(item),
            _ => None,
        }
    }
}

/// One match for a path, with the canonical path of the matched object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindResult {
    /// Canonical `/library[/item[/file]]` path of the object
    pub path: String,
    pub object: ResolvedObject,
}

impl FindResult {
    pub fn kind(&self) -> ObjectKind {
        self.object.kind()
    }
}

// ============================================================================
// FINDER
// ============================================================================

/// Resolves paths against the namespace exposed by a [`LibraryService`].
///
/// # Examples
///
/// ```rust
/// use vlib_core::context::OperationContext;
/// use vlib_core::finder::{Finder, ObjectKind};
/// use vlib_core::model::{Item, Library};
/// use vlib_core::service::InMemoryLibraryService;
///
/// let service = InMemoryLibraryService::new()
///     .with_library(Library::new("lib-a", "content-A"))
///     .with_item(Item::new("item-1", "lib-a", "item-X"));
///
/// let results = Finder::new(&service)
///     .find(&OperationContext::new(), "/content-A/item-X")
///     .unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].kind(), ObjectKind::Item);
/// ```
pub struct Finder<'a, S: LibraryService + ?Sized> {
    service: &'a S,
}

impl<'a, S: LibraryService + ?Sized> Finder<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Returns every object matching `path`, in traversal order.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<FindResult>)` - One or more matches
    /// * `Err(CoreError::NoMatch)` - Nothing matched
    /// * `Err(CoreError::InvalidPath)` - Too many segments or a bad pattern
    /// * Any error from the service, unchanged
    pub fn find(&self, ctx: &OperationContext, path: &str) -> CoreResult<Vec<FindResult>> {
        let segments = split_path(path);
        if segments.len() > MAX_PATH_DEPTH {
            return Err(CoreError::InvalidPath(format!(
                "\"{}\" has {} segments, at most {} (library/item/file) are supported",
                path,
                segments.len(),
                MAX_PATH_DEPTH
            )));
        }
        let matchers = segments
            .iter()
            .map(|segment| SegmentMatcher::parse(segment))
            .collect::<CoreResult<Vec<_>>>()?;

        let results = self.walk(ctx, &matchers)?;
        debug!("Path \"{}\" resolved to {} object(s)", path, results.len());

        if results.is_empty() {
            return Err(CoreError::NoMatch {
                path: path.to_string(),
            });
        }
        Ok(results)
    }

    fn walk(
        &self,
        ctx: &OperationContext,
        matchers: &[SegmentMatcher],
    ) -> CoreResult<Vec<FindResult>> {
        let libraries: Vec<Library> = self
            .service
            .list_libraries(ctx)?
            .into_iter()
            .filter(|library| matchers.first().is_none_or(|m| m.matches(&library.name)))
            .collect();

        let Some(item_matcher) = matchers.get(1) else {
            return Ok(libraries
                .into_iter()
                .map(|library| FindResult {
                    path: join_path(&[library.name.as_str()]),
                    object: ResolvedObject::Library(library),
                })
                .collect());
        };

        let mut items = Vec::new();
        for library in &libraries {
            for item in self.service.list_items(ctx, &library.id)? {
                if item_matcher.matches(&item.name) {
                    items.push((library.name.clone(), item));
                }
            }
        }

        let Some(file_matcher) = matchers.get(2) else {
            return Ok(items
                .into_iter()
                .map(|(library_name, item)| FindResult {
                    path: join_path(&[library_name.as_str(), item.name.as_str()]),
                    object: ResolvedObject::Item(item),
                })
                .collect());
        };

        let mut files = Vec::new();
        for (library_name, item) in &items {
            for file in self.service.list_files(ctx, &item.id)? {
                if file_matcher.matches(&file.name) {
                    files.push(FindResult {
                        path: join_path(&[library_name.as_str(), item.name.as_str(), file.name.as_str()]),
                        object: ResolvedObject::File(file),
                    });
                }
            }
        }
        Ok(files)
    }
}

fn join_path(names: &[&str]) -> String {
    let mut path = String::new();
    for name in names {
        path.push('/');
        path.push_str(name);
    }
    path
}
