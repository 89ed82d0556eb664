use std::env;

use log::warn;

const DEFAULT_SITEMAP_URL: &str = "https://www.coursera.org/sitemap~www~courses.xml";

/// Resolves where the course catalog sitemap lives. The well-known URL is
/// baked in; `COURSE_SITEMAP_URL` overrides it for testing against a mirror.
pub struct ScrapingConfig {
    sitemap_url: String,
}

impl ScrapingConfig {
    pub fn new() -> Self {
        let sitemap_url = match env::var("COURSE_SITEMAP_URL") {
            Ok(url) => url,
            Err(env::VarError::NotPresent) => DEFAULT_SITEMAP_URL.to_string(),
            Err(e) => {
                warn!("COURSE_SITEMAP_URL could not be read ({e}), using the default");
                DEFAULT_SITEMAP_URL.to_string()
            }
        };
        Self { sitemap_url }
    }

    pub fn sitemap_url(&self) -> &str {
        &self.sitemap_url
    }
}
