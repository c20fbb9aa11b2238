//! Core library for resolving and copying content library items.
//!
//! This crate provides the content library data model, a [`LibraryService`]
//! abstraction with a REST implementation, a [`Finder`] that turns
//! `/library/item` paths into typed objects, and the `library.cp`
//! orchestration built on top of them.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vlib_core::config::ClientConfigBuilder;
//! use vlib_core::{CopyRequest, OperationContext, RestLibraryService, copy_library_item};
//! use std::time::Duration;
//!
//! let config = ClientConfigBuilder::new()
//!     .url("https://vcenter.example.com")
//!     .username("administrator@vsphere.local")
//!     .password("secret")
//!     .build()
//!     .unwrap();
//!
//! let ctx = OperationContext::with_timeout(Duration::from_secs(300));
//! let service = RestLibraryService::connect(&config, &ctx).unwrap();
//!
//! let request = CopyRequest::new("/my-content/my-item", "/my-other-content");
//! let new_id = copy_library_item(&ctx, &service, &request).unwrap();
//! println!("{}", new_id);
//! ```

pub mod config;
pub mod context;
pub mod copy;
pub mod error;
pub mod finder;
pub mod model;
pub mod service;

// Re-exports for public API
pub use config::{ClientConfig, ClientConfigBuilder};
pub use context::{CancelHandle, OperationContext};
pub use copy::{CopyRequest, build_copy_spec, copy_library_item, require_single};
pub use error::{CoreError, CoreResult};
pub use finder::{FindResult, Finder, ObjectKind, ResolvedObject};
pub use model::{Item, ItemCopySpec, ItemFile, Library};
pub use service::{InMemoryLibraryService, LibraryService, RestLibraryService};
