pub mod commands;
pub mod dto;
pub mod error;
pub mod i18n;
pub mod mapping;
pub mod ports;
pub mod queries;
pub mod seo;
pub mod services;

pub use error::ApplicationResult;
