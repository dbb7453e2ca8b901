// src/application/commands/preview/mod.rs
mod enable;
mod exit;
mod service;

pub use enable::EnablePreviewCommand;
pub use exit::ExitPreviewCommand;
pub use service::{PreviewDecision, PreviewService};
