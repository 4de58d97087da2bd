//! HTML fixture builders.
//!
//! Produce markup shaped like the live RailsConf pages so extraction and
//! matching can be tested without a network.

/// One talk block on the program page.
#[derive(Debug, Clone, Default)]
pub struct TalkFixture {
    pub id: String,
    pub title: String,
    pub presenter: String,
    pub description: Vec<String>,
    pub bio: Vec<String>,
}

impl TalkFixture {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Presenter name; rendered with the `presented by: ` prefix.
    pub fn presenter(mut self, name: impl Into<String>) -> Self {
        self.presenter = name.into();
        self
    }

    pub fn description(mut self, paragraph: impl Into<String>) -> Self {
        self.description.push(paragraph.into());
        self
    }

    pub fn bio(mut self, paragraph: impl Into<String>) -> Self {
        self.bio.push(paragraph.into());
        self
    }

    pub fn to_html(&self) -> String {
        let description: String = self
            .description
            .iter()
            .map(|p| format!("<p>{}</p>", p))
            .collect();
        let bio: String = self.bio.iter().map(|p| format!("<p>{}</p>", p)).collect();

        format!(
            r##"<div class="session">
  <a name="{id}"></a>
  <h2 class="session-talk-title"><a href="#{id}">{title}</a></h2>
  <h3 class="session-presenter">presented by: {presenter}</h3>
  {description}
  <section class="bio">{bio}</section>
</div>"##,
            id = self.id,
            title = self.title,
            presenter = self.presenter,
            description = description,
            bio = bio,
        )
    }
}

/// One lab block on the labs page.
#[derive(Debug, Clone, Default)]
pub struct LabFixture {
    pub id: String,
    pub title: String,
    pub presenter: String,
    pub description: String,
    pub bio: String,
}

impl LabFixture {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn presenter(mut self, name: impl Into<String>) -> Self {
        self.presenter = name.into();
        self
    }

    pub fn description(mut self, paragraph: impl Into<String>) -> Self {
        self.description = paragraph.into();
        self
    }

    pub fn bio(mut self, paragraph: impl Into<String>) -> Self {
        self.bio = paragraph.into();
        self
    }

    pub fn to_html(&self) -> String {
        format!(
            r##"<div class="program-description-wrap">
  <h2 class="session-talk-title" id="{id}"><a href="#{id}">{title}</a></h2>
  <h3 class="session-presenter">presented by: {presenter}</h3>
  <p>{description}</p>
  <p>Bring a laptop.</p>
  <h3 class="program-speaker-subhead">About the speaker</h3>
  <p>{bio}</p>
</div>"##,
            id = self.id,
            title = self.title,
            presenter = self.presenter,
            description = self.description,
            bio = self.bio,
        )
    }
}

/// Wrap talk blocks in a program page.
pub fn talks_page(talks: &[TalkFixture]) -> String {
    let blocks: String = talks.iter().map(TalkFixture::to_html).collect();
    page(&blocks)
}

/// Wrap lab blocks in a labs page.
pub fn labs_page(labs: &[LabFixture]) -> String {
    let blocks: String = labs.iter().map(LabFixture::to_html).collect();
    page(&blocks)
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Program</title></head><body>{}</body></html>",
        body
    )
}

/// One activity cell in a grid row.
#[derive(Debug, Clone, Default)]
pub struct CellFixture {
    pub title: String,
    pub track: String,
}

impl CellFixture {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            track: String::new(),
        }
    }

    pub fn track(mut self, track: impl Into<String>) -> Self {
        self.track = track.into();
        self
    }

    /// A spacer cell with no session title.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One grid day: location headers plus `(time range, cells)` rows.
#[derive(Debug, Clone, Default)]
pub struct DayFixture {
    pub locations: Vec<String>,
    pub rows: Vec<(String, Vec<CellFixture>)>,
}

impl DayFixture {
    pub fn new(locations: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            locations: locations.into_iter().map(|l| l.into()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn slot(mut self, time_range: impl Into<String>, cells: Vec<CellFixture>) -> Self {
        self.rows.push((time_range.into(), cells));
        self
    }

    fn to_html(&self, day_number: usize) -> String {
        let headers: String = self
            .locations
            .iter()
            .map(|l| format!("<th>{}</th>", l))
            .collect();

        let rows: String = self
            .rows
            .iter()
            .map(|(time_range, cells)| {
                let cells: String = cells
                    .iter()
                    .map(|cell| {
                        if cell.title.is_empty() {
                            "<td></td>".to_string()
                        } else {
                            format!(
                                r#"<td><p class="session-title">{}</p><p class="track_name_base">{}</p></td>"#,
                                cell.title, cell.track
                            )
                        }
                    })
                    .collect();
                format!(
                    r#"<tr><td class="schedule-time-slot">{}</td>{}</tr>"#,
                    time_range, cells
                )
            })
            .collect();

        format!(
            r#"<div id="day-{n}"><table><thead><tr><th>(Time Slots)</th>{headers}</tr></thead><tbody>{rows}</tbody></table></div>"#,
            n = day_number,
            headers = headers,
            rows = rows,
        )
    }
}

/// Render a schedule page with `day-1`, `day-2`, ... containers.
pub fn schedule_page(days: &[DayFixture]) -> String {
    let body: String = days
        .iter()
        .enumerate()
        .map(|(i, day)| day.to_html(i + 1))
        .collect();
    page(&body)
}
