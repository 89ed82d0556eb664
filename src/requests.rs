use reqwest::{Client, ClientBuilder, Response, StatusCode};

pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new() -> anyhow::Result<Self> {
        let client = ClientBuilder::new().build()?;
        Ok(Self { client })
    }

    pub async fn fetch_url_response(&self, url: &str) -> anyhow::Result<Response> {
        let response = self.client.get(url).send().await?;
        Ok(response)
    }

    pub async fn fetch_url_body(&self, url: &str) -> anyhow::Result<String> {
        let response = self.fetch_url_response(url).await?;
        let body = response.text().await?;
        Ok(body)
    }

    /// Fetches the catalog sitemap. A non-200 status yields `None`, which the
    /// caller must treat as fatal for the whole run.
    pub async fn fetch_catalog(&self, url: &str) -> anyhow::Result<Option<String>> {
        let response = self.fetch_url_response(url).await?;
        if response.status() != StatusCode::OK {
            return Ok(None);
        }
        let body = response.text().await?;
        Ok(Some(body))
    }
}
