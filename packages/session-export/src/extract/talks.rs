//! Talk extraction from the program listing page.

use scraper::Html;
use tracing::{debug, info};

use crate::config::{ConferenceConfig, TalkSelectors};
use crate::error::Result;
use crate::types::{Session, SessionSource, Speaker};

use super::html::{join_paragraphs, strip_presenter, Matcher};

const PAGE: &str = "talks";

struct TalkMatchers {
    block: Matcher,
    bio_paragraphs: Matcher,
    paragraphs: Matcher,
    id_anchor: Matcher,
    title: Matcher,
    presenter: Matcher,
}

impl TalkMatchers {
    fn compile(selectors: &TalkSelectors) -> Result<Self> {
        Ok(Self {
            block: Matcher::parse(&selectors.block)?,
            bio_paragraphs: Matcher::parse(&selectors.bio_paragraphs)?,
            paragraphs: Matcher::parse(&selectors.paragraphs)?,
            id_anchor: Matcher::parse(&selectors.id_anchor)?,
            title: Matcher::parse(&selectors.title)?,
            presenter: Matcher::parse(&selectors.presenter)?,
        })
    }
}

/// Extract one session per talk block, in page order.
///
/// The id comes from the `name` attribute of the block's first anchor. Every
/// paragraph that is not part of the speaker bio is description.
///
/// Description and bio hold paragraph text with inline markup dropped, not
/// the paragraphs' HTML, so exports carry no `<p>` or `<em>` tags.
pub fn extract_talks(document: &Html, config: &ConferenceConfig) -> Result<Vec<Session>> {
    let m = TalkMatchers::compile(&config.talks)?;
    let mut sessions = Vec::new();

    for (index, block) in document.select(m.block.selector()).enumerate() {
        let unique_id = m.id_anchor.required_attr(block, "name", PAGE, index)?;
        m.title.required(block, PAGE, index)?;
        let name = m.title.text(block).trim().to_string();

        let bio_paragraphs = m.bio_paragraphs.all(block);
        let description_paragraphs = m
            .paragraphs
            .all(block)
            .into_iter()
            .filter(|p| !bio_paragraphs.contains(p));

        let speaker = Speaker::new(
            strip_presenter(&m.presenter.text(block), &config.presenter_prefix),
            join_paragraphs(bio_paragraphs.iter().copied()),
        );

        debug!(index, unique_id = %unique_id, name = %name, "Extracted talk");
        sessions.push(
            Session::new(unique_id, name, join_paragraphs(description_paragraphs), speaker)
                .with_source(SessionSource::Talk),
        );
    }

    info!(count = sessions.len(), "Extracted talks");
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::testing::{talks_page, TalkFixture};

    fn extract(html: &str) -> Result<Vec<Session>> {
        extract_talks(&Html::parse_document(html), &ConferenceConfig::default())
    }

    #[test]
    fn test_extracts_one_session_per_block() {
        let html = talks_page(&[
            TalkFixture::new("talk-1", "Rails in Depth").presenter("Ada Lovelace"),
            TalkFixture::new("talk-2", "Ruby Internals").presenter("Grace Hopper"),
            TalkFixture::new("talk-3", "Turbolinks").presenter("Alan Kay"),
        ]);

        let sessions = extract(&html).unwrap();

        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0].unique_id, "talk-1");
        assert_eq!(sessions[1].name, "Ruby Internals");
        assert_eq!(sessions[2].speaker.display_name, "Alan Kay");
        assert!(sessions.iter().all(|s| s.source == SessionSource::Talk));
    }

    #[test]
    fn test_bio_paragraphs_are_not_description() {
        let html = talks_page(&[TalkFixture::new("t", "Title")
            .presenter("Ada")
            .description("First paragraph.")
            .description("Second paragraph.")
            .bio("Ada writes code.")
            .bio("She likes engines.")]);

        let sessions = extract(&html).unwrap();

        assert_eq!(sessions[0].description, "First paragraph. Second paragraph.");
        assert_eq!(sessions[0].speaker.bio, "Ada writes code. She likes engines.");
    }

    #[test]
    fn test_description_and_bio_are_text_not_markup() {
        let html = talks_page(&[TalkFixture::new("t", "Title")
            .description("Rails is <em>fast</em>.")
            .bio("Ada <a href=\"/ada\">blogs</a>.")]);

        let sessions = extract(&html).unwrap();

        assert_eq!(sessions[0].description, "Rails is fast.");
        assert_eq!(sessions[0].speaker.bio, "Ada blogs.");
    }

    #[test]
    fn test_title_is_trimmed() {
        let html = r#"<div class="session"><a name="x"></a>
            <h2 class="session-talk-title"><a>
                Spaced Out
            </a></h2></div>"#;

        let sessions = extract(html).unwrap();

        assert_eq!(sessions[0].name, "Spaced Out");
        assert_eq!(sessions[0].speaker.display_name, "");
    }

    #[test]
    fn test_missing_anchor_name_fails() {
        let html = r#"<div class="session"><a href="/nope">x</a>
            <h2 class="session-talk-title"><a>T</a></h2></div>"#;

        let err = extract(html).unwrap_err();

        assert!(matches!(
            err,
            ExtractionError::MissingAttribute { page: "talks", index: 0, attribute: "name", .. }
        ));
    }

    #[test]
    fn test_missing_title_fails() {
        let html = r#"<div class="session"><a name="x"></a><h2>No class</h2></div>"#;

        let err = extract(html).unwrap_err();

        assert!(matches!(err, ExtractionError::MissingElement { page: "talks", .. }));
    }

    #[test]
    fn test_no_blocks_yields_empty_list() {
        let sessions = extract("<html><body><p>Coming soon</p></body></html>").unwrap();
        assert!(sessions.is_empty());
    }
}
