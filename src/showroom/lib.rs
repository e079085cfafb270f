//! # Showroom Architecture
//!
//! Showroom is the catalog core of a furniture storefront: the product
//! registry, how it is saved, and the admin gate in front of its only
//! mutation. The storefront pages are clients of this library; the bundled
//! CLI is one such client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Composition root: owns catalog, store, session, config   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + catalog.rs + session.rs    │
//! │  - Queries, guarded update, write-through                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait, FsBackend / MemBackend             │
//! │  - ProductStore: one JSON array under one key               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//!
//! One [`api::ShowroomApi`] per process. It seeds the [`catalog::Catalog`]
//! from the saved collection, or from [`defaults`] on first run, and starts
//! with a logged-out [`session::AdminSession`]. Every effective update is
//! written straight through to the store.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`catalog`]: The in-memory registry
//! - [`commands`]: Business logic per operation
//! - [`session`]: Admin login gate
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Product`, `ProductUpdate`, `Category`, price formatting
//! - [`defaults`]: First-run dataset
//! - [`route`]: Storefront route parsing
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery and API construction
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod defaults;
pub mod error;
pub mod init;
pub mod model;
pub mod route;
pub mod session;
pub mod store;
