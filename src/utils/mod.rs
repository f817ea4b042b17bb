// src/utils/mod.rs
pub mod identifiers;
pub mod serialization;
