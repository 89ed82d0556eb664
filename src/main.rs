use std::io::Write;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use coursepeek::{
    CourseScraper, RequestClient, ScrapingConfig, parse_course_urls, sample_course_urls,
    write_report,
};
use dotenv::dotenv;
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Retrieve info from n randomly sampled courses in the public catalog.
#[derive(Parser)]
struct Args {
    /// Number of course pages to sample from the catalog
    #[arg(long = "n_courses", default_value_t = 20)]
    n_courses: usize,

    /// Destination path for the xlsx report
    #[arg(long, default_value = "courses_info.xlsx")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();
    let args = Args::parse();

    let config = ScrapingConfig::new();
    let client = RequestClient::new()?;

    info!("Fetching course catalog from {}", config.sitemap_url());
    let Some(catalog_xml) = client.fetch_catalog(config.sitemap_url()).await? else {
        bail!(
            "course catalog could not be fetched from {}",
            config.sitemap_url()
        );
    };

    let course_urls = parse_course_urls(&catalog_xml)?;
    info!("Catalog lists {} courses", course_urls.len());
    let sampled = sample_course_urls(&course_urls, args.n_courses, &mut StdRng::from_entropy())?;

    let mut records = Vec::with_capacity(sampled.len());
    for (count, course_url) in sampled.iter().enumerate() {
        print!("Proceeding course {}/{}...\r", count + 1, sampled.len());
        std::io::stdout().flush()?;
        let scraper = CourseScraper::new(course_url.clone());
        records.push(scraper.scrape(&client).await?);
    }

    write_report(&records, &args.output)?;
    println!("Results saved to \"{}\"", args.output.display());
    Ok(())
}
