//! # Tidemark Store
//!
//! Storage abstraction for checkpoint documents. The document store itself
//! lives outside Tidemark; this crate only defines the [`CheckpointStore`]
//! trait the rest of the workspace talks to, plus [`MemoryStore`] for tests.
//!
//! ## Key Types
//!
//! - [`CheckpointStore`] - The async trait for checkpoint persistence
//! - [`MemoryStore`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tidemark_core::CheckpointId;
//! use tidemark_store::{CheckpointStore, MemoryStore};
//!
//! async fn example() {
//!     let store = MemoryStore::new();
//!     let id = CheckpointId::derive("local-uuid", "wss://peer/db", "_default");
//!
//!     store.put_checkpoint(&id, br#"{"local":12}"#).await.unwrap();
//!     let body = store.get_checkpoint(&id).await.unwrap();
//!     assert!(body.is_some());
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Opaque bodies**: Stores persist checkpoint bodies as raw bytes and never parse them
//! - **Last write wins**: `put_checkpoint` replaces any previous body

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::CheckpointStore;
