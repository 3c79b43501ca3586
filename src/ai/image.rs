use crate::ai::{AiError, ImageGenerator};
use crate::logger;
use async_trait::async_trait;
use reqwest::Url;

const IMAGE_BASE_URL: &str = "https://image.pollinations.ai/prompt/";

/// Image client backed by the pollinations.ai prompt endpoint. The image
/// URL is derived from the description; a GET confirms the service can
/// render it before the URL is handed back.
#[derive(Debug)]
pub struct PollinationsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PollinationsClient {
    pub fn new() -> Result<Self, String> {
        Self::with_base_url(IMAGE_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, String> {
        let base_url =
            Url::parse(base_url).map_err(|e| format!("Invalid image base URL: {}", e))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    fn image_url(&self, description: &str) -> Result<Url, AiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| "Image base URL cannot be a base")?
            .pop_if_empty()
            .push(description);
        Ok(url)
    }
}

impl Default for PollinationsClient {
    fn default() -> Self {
        // IMAGE_BASE_URL is a valid base URL
        Self::new().unwrap()
    }
}

#[async_trait]
impl ImageGenerator for PollinationsClient {
    async fn fetch_image(&self, description: &str) -> Result<Option<String>, AiError> {
        if description.trim().is_empty() {
            return Ok(None);
        }

        let url = self.image_url(description)?;
        logger::log(&format!("Fetching image: {}", url));

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| format!("Image request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Image service returned {}", response.status()).into());
        }

        Ok(Some(url.to_string()))
    }
}
