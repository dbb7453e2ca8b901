// src/domain/mod.rs
pub mod article;
pub mod errors;
pub mod locale;
pub mod page;
