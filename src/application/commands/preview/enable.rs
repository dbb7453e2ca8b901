use super::{PreviewDecision, PreviewService};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::locale::Locale,
};

const DRAFT_STATUS: &str = "draft";

#[derive(Debug, Default)]
pub struct EnablePreviewCommand {
    pub secret: Option<String>,
    pub url: Option<String>,
    pub locale: Option<String>,
    pub status: Option<String>,
}

impl PreviewService {
    /// The secret is checked before anything else. A mismatch reports
    /// `NotFound` so the endpoint looks absent.
    pub fn enable(&self, command: EnablePreviewCommand) -> ApplicationResult<PreviewDecision> {
        if !self.secret_matches(command.secret.as_deref()) {
            tracing::warn!("preview request with invalid secret");
            return Err(ApplicationError::not_found("not found"));
        }

        let url = command
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ApplicationError::validation("missing url parameter"))?;

        let code = command.locale.as_deref().unwrap_or(Locale::default().code());
        let locale = Locale::parse(code)
            .map_err(|_| ApplicationError::validation("invalid locale"))?;

        let draft = command.status.as_deref() == Some(DRAFT_STATUS);
        let redirect = format!("/{}/{}", locale.code(), url.trim_start_matches('/'));
        tracing::info!(draft, %redirect, "preview mode updated");

        Ok(PreviewDecision { draft, redirect })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PreviewService {
        PreviewService::new(Some("s3cret".into()))
    }

    fn command(secret: &str, status: &str) -> EnablePreviewCommand {
        EnablePreviewCommand {
            secret: Some(secret.into()),
            url: Some("blog/my-post".into()),
            locale: Some("en".into()),
            status: Some(status.into()),
        }
    }

    #[test]
    fn draft_status_enables_and_redirects_under_locale() {
        let decision = service().enable(command("s3cret", "draft")).unwrap();
        assert_eq!(
            decision,
            PreviewDecision {
                draft: true,
                redirect: "/en/blog/my-post".into()
            }
        );
    }

    #[test]
    fn other_status_disables() {
        let decision = service().enable(command("s3cret", "published")).unwrap();
        assert!(!decision.draft);
        assert_eq!(decision.redirect, "/en/blog/my-post");

        let mut no_status = command("s3cret", "draft");
        no_status.status = None;
        assert!(!service().enable(no_status).unwrap().draft);
    }

    #[test]
    fn invalid_secret_is_not_found_whatever_the_status() {
        for status in ["draft", "published", ""] {
            let err = service().enable(command("wrong", status)).unwrap_err();
            assert!(matches!(err, ApplicationError::NotFound(_)), "{status}");
        }
        let missing = EnablePreviewCommand::default();
        assert!(matches!(service().enable(missing), Err(ApplicationError::NotFound(_))));
    }

    #[test]
    fn missing_url_is_a_validation_error() {
        let mut cmd = command("s3cret", "draft");
        cmd.url = Some("  ".into());
        assert!(matches!(service().enable(cmd), Err(ApplicationError::Validation(_))));
    }

    #[test]
    fn unsupported_locale_is_a_validation_error() {
        let mut cmd = command("s3cret", "draft");
        cmd.locale = Some("fr".into());
        assert!(matches!(service().enable(cmd), Err(ApplicationError::Validation(_))));
    }

    #[test]
    fn locale_defaults_to_english_and_leading_slash_is_trimmed() {
        let mut cmd = command("s3cret", "draft");
        cmd.locale = None;
        cmd.url = Some("/about".into());
        assert_eq!(service().enable(cmd).unwrap().redirect, "/en/about");
    }
}
