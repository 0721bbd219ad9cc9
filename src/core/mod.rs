// src/core/mod.rs

pub mod identity;
pub mod price;
pub mod sentiment;
