//! Lab extraction from the labs listing page.

use scraper::Html;
use tracing::{debug, info};

use crate::config::{ConferenceConfig, LabSelectors};
use crate::error::Result;
use crate::types::{Session, SessionSource, Speaker};

use super::html::{join_paragraphs, strip_presenter, Matcher};

const PAGE: &str = "labs";

struct LabMatchers {
    block: Matcher,
    bio_paragraphs: Matcher,
    description_paragraphs: Matcher,
    id_heading: Matcher,
    title: Matcher,
    presenter: Matcher,
}

impl LabMatchers {
    fn compile(selectors: &LabSelectors) -> Result<Self> {
        Ok(Self {
            block: Matcher::parse(&selectors.block)?,
            bio_paragraphs: Matcher::parse(&selectors.bio_paragraphs)?,
            description_paragraphs: Matcher::parse(&selectors.description_paragraphs)?,
            id_heading: Matcher::parse(&selectors.id_heading)?,
            title: Matcher::parse(&selectors.title)?,
            presenter: Matcher::parse(&selectors.presenter)?,
        })
    }
}

/// Extract one session per lab block, in page order.
///
/// Unlike talks, the id is the title heading's `id` attribute and only the
/// paragraph directly after the presenter heading is description.
pub fn extract_labs(document: &Html, config: &ConferenceConfig) -> Result<Vec<Session>> {
    let m = LabMatchers::compile(&config.labs)?;
    let mut sessions = Vec::new();

    for (index, block) in document.select(m.block.selector()).enumerate() {
        let unique_id = m.id_heading.required_attr(block, "id", PAGE, index)?;
        m.title.required(block, PAGE, index)?;
        let name = m.title.text(block).trim().to_string();

        let speaker = Speaker::new(
            strip_presenter(&m.presenter.text(block), &config.presenter_prefix),
            join_paragraphs(m.bio_paragraphs.all(block)),
        );
        let description = join_paragraphs(m.description_paragraphs.all(block));

        debug!(index, unique_id = %unique_id, name = %name, "Extracted lab");
        sessions.push(
            Session::new(unique_id, name, description, speaker).with_source(SessionSource::Lab),
        );
    }

    info!(count = sessions.len(), "Extracted labs");
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::testing::{labs_page, LabFixture};

    fn extract(html: &str) -> Result<Vec<Session>> {
        extract_labs(&Html::parse_document(html), &ConferenceConfig::default())
    }

    #[test]
    fn test_extracts_lab_fields() {
        let html = labs_page(&[LabFixture::new("lab-ember", "Build an Ember App")
            .presenter("Yehuda Katz")
            .description("Hands on with Ember.")
            .bio("Yehuda is on the core team.")]);

        let sessions = extract(&html).unwrap();

        assert_eq!(sessions.len(), 1);
        let lab = &sessions[0];
        assert_eq!(lab.unique_id, "lab-ember");
        assert_eq!(lab.name, "Build an Ember App");
        assert_eq!(lab.speaker.display_name, "Yehuda Katz");
        // Only the paragraph right after the presenter heading.
        assert_eq!(lab.description, "Hands on with Ember.");
        assert_eq!(lab.speaker.bio, "Yehuda is on the core team.");
        assert_eq!(lab.source, SessionSource::Lab);
    }

    #[test]
    fn test_missing_heading_id_fails() {
        let html = r#"<div class="program-description-wrap">
            <h2 class="session-talk-title"><a>Lab</a></h2></div>"#;

        let err = extract(html).unwrap_err();

        assert!(matches!(
            err,
            ExtractionError::MissingAttribute { page: "labs", attribute: "id", .. }
        ));
    }

    #[test]
    fn test_missing_heading_fails_as_missing_element() {
        let html = r#"<div class="program-description-wrap"><p>orphan</p></div>"#;

        let err = extract(html).unwrap_err();

        assert!(matches!(err, ExtractionError::MissingElement { page: "labs", index: 0, .. }));
    }
}
