// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod engine;

pub mod collect;
pub mod csv;
pub mod error;
pub mod file;
pub mod progress;
pub mod record;
pub mod report;
pub mod runner;
pub mod store;
