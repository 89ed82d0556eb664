use anyhow::Context;
use scraper::{Html, Selector};
use serde::Deserialize;

use crate::requests::RequestClient;
use crate::text_manipulators::extract_text;

pub const DURATION_NOT_SPECIFIED: &str = "Non specified";
pub const NOT_RATED: &str = "Not rated yet";

/// One scraped course, in the column order the report uses.
#[derive(Debug)]
pub struct CourseRecord {
    pub title: String,
    pub language: Option<String>,
    pub upcoming_session: Option<String>,
    pub duration: String,
    pub average_score: String,
}

/// The ld+json structured-data block embedded in a course page. Only the
/// session instances are of interest here.
#[derive(Debug, Deserialize)]
struct CourseStructuredData {
    #[serde(rename = "hasCourseInstance", default)]
    has_course_instance: Vec<CourseInstance>,
}

#[derive(Debug, Deserialize)]
struct CourseInstance {
    #[serde(rename = "startDate")]
    start_date: Option<String>,
}

#[derive(Debug)]
pub struct CourseScraper {
    pub url: String,
}

impl CourseScraper {
    pub fn new(url: String) -> Self {
        Self { url }
    }

    /// Fetches and parses one course page. Any fetch or parse failure
    /// propagates to the caller and aborts the run.
    pub async fn scrape(&self, client: &RequestClient) -> anyhow::Result<CourseRecord> {
        let html = client.fetch_url_body(&self.url).await?;
        parse_course_page(&html)
    }
}

/// Best-effort extraction of the five record fields. Each field is optional
/// on the page; the title is the one element the page must have in some form.
pub fn parse_course_page(html: &str) -> anyhow::Result<CourseRecord> {
    let document = Html::parse_document(html);

    let heading_selector = Selector::parse("div.rc-CTANavItem").unwrap();
    let page_title_selector = Selector::parse("title").unwrap();
    let language_selector = Selector::parse("div.language-info").unwrap();
    let week_view_selector = Selector::parse("div.rc-WeekView").unwrap();
    let week_selector = Selector::parse("div.week").unwrap();
    let score_selector = Selector::parse("div.ratings-text.bt3-visible-xs").unwrap();
    let json_selector = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();

    let title = match document.select(&heading_selector).next() {
        Some(heading) => extract_text(heading),
        None => document
            .select(&page_title_selector)
            .next()
            .map(extract_text)
            .context("course page has neither a heading nor a <title> element")?,
    };

    let language = document.select(&language_selector).next().map(extract_text);

    let upcoming_session = match document.select(&json_selector).next() {
        Some(script) => upcoming_session_start(&script.text().collect::<String>())?,
        None => None,
    };

    let duration = match document.select(&week_view_selector).next() {
        Some(week_view) => {
            let weeks = week_view.select(&week_selector).count();
            format!("{weeks} weeks")
        }
        None => DURATION_NOT_SPECIFIED.to_string(),
    };

    let average_score = document
        .select(&score_selector)
        .next()
        .map(extract_text)
        .unwrap_or_else(|| NOT_RATED.to_string());

    Ok(CourseRecord {
        title,
        language,
        upcoming_session,
        duration,
        average_score,
    })
}

/// Reads the start date of the last listed course instance. The source data
/// carries no documented ordering contract, so "last" is kept from the
/// original site behavior rather than interpreted as "most recent".
fn upcoming_session_start(raw_json: &str) -> anyhow::Result<Option<String>> {
    let structured: CourseStructuredData =
        serde_json::from_str(raw_json).context("course page ld+json block is malformed")?;
    Ok(structured
        .has_course_instance
        .into_iter()
        .next_back()
        .and_then(|instance| instance.start_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!("<html><head><title>Fallback Title</title></head><body>{body}</body></html>")
    }

    #[test]
    fn extracts_all_fields_when_present() {
        let html = page(
            r#"<div class="rc-CTANavItem">Practical Rust</div>
               <div class="language-info">English</div>
               <div class="rc-WeekView">
                 <div class="week">1</div><div class="week">2</div><div class="week">3</div>
               </div>
               <div class="ratings-text bt3-visible-xs">4.8 stars</div>
               <script type="application/ld+json">
                 {"hasCourseInstance": [
                   {"startDate": "2026-01-05"},
                   {"startDate": "2026-02-02"}
                 ]}
               </script>"#,
        );
        let record = parse_course_page(&html).unwrap();
        assert_eq!(record.title, "Practical Rust");
        assert_eq!(record.language.as_deref(), Some("English"));
        assert_eq!(record.upcoming_session.as_deref(), Some("2026-02-02"));
        assert_eq!(record.duration, "3 weeks");
        assert_eq!(record.average_score, "4.8 stars");
    }

    #[test]
    fn title_falls_back_to_the_page_title() {
        let record = parse_course_page(&page("")).unwrap();
        assert_eq!(record.title, "Fallback Title");
    }

    #[test]
    fn missing_title_everywhere_is_an_error() {
        assert!(parse_course_page("<html><body></body></html>").is_err());
    }

    #[test]
    fn missing_language_is_absent() {
        let record = parse_course_page(&page("")).unwrap();
        assert_eq!(record.language, None);
    }

    #[test]
    fn duration_counts_week_sections() {
        let html = page(r#"<div class="rc-WeekView"><div class="week"></div></div>"#);
        let record = parse_course_page(&html).unwrap();
        assert_eq!(record.duration, "1 weeks");
    }

    #[test]
    fn duration_without_week_view_is_non_specified() {
        let record = parse_course_page(&page("")).unwrap();
        assert_eq!(record.duration, DURATION_NOT_SPECIFIED);
    }

    #[test]
    fn missing_ratings_element_is_not_rated_yet() {
        let record = parse_course_page(&page("")).unwrap();
        assert_eq!(record.average_score, NOT_RATED);
    }

    #[test]
    fn empty_course_instance_list_yields_absent_session() {
        let html = page(r#"<script type="application/ld+json">{"hasCourseInstance": []}</script>"#);
        let record = parse_course_page(&html).unwrap();
        assert_eq!(record.upcoming_session, None);
    }

    #[test]
    fn missing_course_instance_key_yields_absent_session() {
        let html = page(r#"<script type="application/ld+json">{"name": "A course"}</script>"#);
        let record = parse_course_page(&html).unwrap();
        assert_eq!(record.upcoming_session, None);
    }

    #[test]
    fn last_course_instance_wins() {
        let html = page(
            r#"<script type="application/ld+json">
               {"hasCourseInstance": [{"startDate": "2025-09-01"}, {"startDate": "2025-10-06"}]}
               </script>"#,
        );
        let record = parse_course_page(&html).unwrap();
        assert_eq!(record.upcoming_session.as_deref(), Some("2025-10-06"));
    }

    #[test]
    fn malformed_structured_data_is_an_error() {
        let html = page(r#"<script type="application/ld+json">{not json}</script>"#);
        assert!(parse_course_page(&html).is_err());
    }
}
