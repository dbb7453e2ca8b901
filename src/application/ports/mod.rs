// src/application/ports/mod.rs
pub mod content_source;
pub mod records;
