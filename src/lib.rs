mod catalog;
mod config;
mod sample_size_error;

mod course_scraper;
mod report;
mod requests;
mod text_manipulators;

pub use catalog::{parse_course_urls, sample_course_urls};
pub use config::ScrapingConfig;
pub use course_scraper::{CourseRecord, CourseScraper};
pub use report::write_report;
pub use requests::RequestClient;
pub use sample_size_error::SampleSizeError;
