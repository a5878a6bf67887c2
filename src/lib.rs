//! Display-title stack and composition engine.
//!
//! This crate keeps one authoritative display title for an application made
//! of nested, dynamically activated units (pages, views, tabs). It includes:
//!
//! - A requested-title history with deduplicating push, so the previous
//!   title returns automatically when a unit goes away
//! - A pure composer assembling prefix, requested value, suffix and a
//!   `(n)` notification overlay into the final string
//! - A manager orchestrating history, composition and the title surface
//!   behind a sink trait
//! - An activate/deactivate protocol binding unit lifetimes to history
//!   entries via move-only handles
//! - Route-chain resolution (deepest declared title wins, inherit markers
//!   respected)
//! - YAML options with per-field defaults, plus a thread-safe shared handle
//!
//! The crate is host-framework agnostic: lifecycle hooks, routing events and
//! the physical title surface (window title bar, terminal tab, browser tab)
//! reach it through explicit calls and the [`TitleSink`] trait.

pub mod compose;
pub mod defaults;
pub mod error;
pub mod history;
pub mod lifecycle;
pub mod manager;
pub mod options;
pub mod routes;
pub mod shared;
pub mod sink;

// Re-export main types for convenience
pub use manager::TitleManager;
pub use options::TitleOptions;
pub use sink::{MemorySink, TitleSink};

// Composition
pub use compose::compose_title;
// History
pub use history::TitleHistory;
// Unit lifecycle
pub use lifecycle::{ActivationHandle, TitleRequest, UnitId, activate, deactivate};
// Route-chain resolution
pub use routes::{RouteEntry, RouteTitle, resolve_route_title};
// Thread-safe handle
pub use shared::SharedTitleManager;
// Configuration errors
pub use error::OptionsError;
