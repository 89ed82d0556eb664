use anyhow::Context;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::sample_size_error::SampleSizeError;

/// Pulls the `<loc>` text out of every leaf entry of the sitemap. The match
/// is on the local tag name only, so any sitemap namespace is accepted.
pub fn parse_course_urls(catalog_xml: &str) -> anyhow::Result<Vec<String>> {
    let document = roxmltree::Document::parse(catalog_xml)?;
    let mut course_urls = vec![];
    for entry in document
        .root_element()
        .children()
        .filter(|node| node.is_element())
    {
        let loc = entry
            .children()
            .find(|child| child.tag_name().name() == "loc")
            .and_then(|loc| loc.text())
            .context("catalog entry is missing its <loc> text")?;
        course_urls.push(loc.trim().to_string());
    }
    Ok(course_urls)
}

/// Draws `n_courses` URLs uniformly at random without replacement. The output
/// order is randomized, not catalog order. The generator is passed in so
/// callers can seed it.
pub fn sample_course_urls<R: Rng + ?Sized>(
    course_urls: &[String],
    n_courses: usize,
    rng: &mut R,
) -> Result<Vec<String>, SampleSizeError> {
    if n_courses > course_urls.len() {
        return Err(SampleSizeError {
            requested: n_courses,
            available: course_urls.len(),
        });
    }
    let mut sampled = course_urls.to_vec();
    sampled.shuffle(rng);
    sampled.truncate(n_courses);
    Ok(sampled)
}
