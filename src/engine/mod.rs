// src/engine/mod.rs
//! # Reconciliation engine
//!
//! This module compares a **freshly scraped batch** against the **prior
//! history** of the same products and decides which prices dropped.
//!
//! ## What lives here
//! - **Latest-known-price indexing**: collapsing a full history (many runs,
//!   many rows per link) down to one most-recent observation per link.
//! - **Batch comparison**: walking the new batch in order and pairing each
//!   record with its indexed baseline.
//! - **Alert derivation**: a [`types::PriceAlert`] for every strictly lower
//!   new price, in batch order.
//!
//! ## What does **not** live here
//! - **Price parsing** lives in `core::price`; by the time records reach
//!   the engine their `price` field is already decided.
//! - **File I/O** lives in `store`; the engine sees history as a slice and
//!   never learns where it came from.
//! - **Reporting** lives in `report`; alerts are plain data here.
//!
//! ## Conventions & invariants
//! - The engine is **pure**: same inputs, same outputs, no side effects.
//! - History is **read-only**; the output batch is the input batch,
//!   untouched in content and order. Appending it to the table is the
//!   runner's job.
//! - A link with no baseline never alerts, however low its new price.
//! - Prices that are unknown on either side never alert; equal prices
//!   never alert.
//!
//! In short: the engine decides **what changed**. Other layers decide how
//! it was collected, stored, and shown.

pub mod types;

mod reconcile;
pub use reconcile::{latest_index, reconcile};
