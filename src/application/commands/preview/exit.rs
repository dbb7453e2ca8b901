use super::{PreviewDecision, PreviewService};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::locale::Locale,
};

#[derive(Debug, Default)]
pub struct ExitPreviewCommand {
    pub locale: Option<String>,
}

impl PreviewService {
    /// Always turns draft mode off and sends the client to the blog listing.
    pub fn exit(&self, command: ExitPreviewCommand) -> ApplicationResult<PreviewDecision> {
        let locale = match command.locale.as_deref() {
            Some(code) => {
                Locale::parse(code).map_err(|_| ApplicationError::validation("invalid locale"))?
            }
            None => Locale::default(),
        };

        Ok(PreviewDecision {
            draft: false,
            redirect: format!("/{}/blog", locale.code()),
        })
    }
}
