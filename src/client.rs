use crate::errors::StabilityError;
use crate::http;
use crate::http::common::{DEFAULT_BASE_URL, Endpoint};
use crate::request::{ImageToVideoRequest, Sd3Request, UltraRequest};
use crate::response::{ImageResponse, ImageToVideoResponse};
use bytes::Bytes;
use reqwest::Client as ReqwestClient;
use std::time::Duration;

/// The main client for interacting with the Stability AI API.
///
/// The caller supplies the provider API key directly; it is attached to
/// every request as `Authorization: Bearer <key>`.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) api_key: String,
    #[allow(clippy::struct_field_names)]
    pub(crate) http_client: ReqwestClient,
    pub(crate) base_url: String,
}

/// Builder for `Client` instances.
///
/// # Example
///
/// ```
/// use stability_rs::Client;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), stability_rs::StabilityError> {
/// let client = Client::builder("api_key".to_string())
///     .timeout(Duration::from_secs(120))
///     .connect_timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    base_url: Option<String>,
}

impl ClientBuilder {
    /// Sets the total request timeout.
    ///
    /// This is the maximum time a request can take from start to finish,
    /// including connection time, sending the request, and receiving the
    /// response. Generation requests render server-side before responding,
    /// so consider a generous value (e.g., 60-180 seconds).
    ///
    /// If not set, uses reqwest's default (no timeout).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is the maximum time to wait for establishing a connection to the
    /// server. A shorter timeout here can help fail fast if the network is
    /// unavailable.
    ///
    /// If not set, uses reqwest's default.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Overrides the API host, `https://api.stability.ai` by default.
    ///
    /// Mainly useful for pointing the client at a local mock server in
    /// tests.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Builds the `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`StabilityError::ClientBuild`] if the underlying HTTP client
    /// cannot be constructed (e.g., TLS backend initialization failure).
    pub fn build(self) -> Result<Client, StabilityError> {
        let mut builder = ReqwestClient::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| StabilityError::ClientBuild(e.to_string()))?;

        Ok(Client {
            api_key: self.api_key,
            http_client,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

impl Client {
    /// Creates a new builder for `Client` instances.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Your Stability AI API key.
    #[must_use]
    pub const fn builder(api_key: String) -> ClientBuilder {
        ClientBuilder {
            api_key,
            timeout: None,
            connect_timeout: None,
            base_url: None,
        }
    }

    /// Creates a new client with default transport settings.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Your Stability AI API key.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http_client: ReqwestClient::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Generates an image with Stable Image Ultra.
    ///
    /// Issues a POST to `/v2beta/stable-image/generate/ultra` and waits for
    /// the complete response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails validation, the HTTP request
    /// fails, or the API returns a non-success status.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use stability_rs::{Client, UltraRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("api-key".to_string());
    ///
    /// let response = client
    ///     .generate_ultra(UltraRequest::new("a lighthouse on a cliff at dusk"))
    ///     .await?;
    /// std::fs::write("lighthouse.png", &response.image_data)?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn generate_ultra(
        &self,
        request: UltraRequest,
    ) -> Result<ImageResponse, StabilityError> {
        request.validate()?;
        log::debug!("Generating image (ultra)");

        let response = http::generate::generate_image(
            &self.http_client,
            &self.base_url,
            &self.api_key,
            Endpoint::GenerateUltra,
            request.into_form_parts(),
        )
        .await?;

        log::debug!(
            "Image generated: {} bytes, finish_reason={:?}",
            response.image_data.len(),
            response.finish_reason
        );

        Ok(response)
    }

    /// Generates an image with Stable Diffusion 3.
    ///
    /// Issues a POST to `/v2beta/stable-image/generate/sd3` and waits for
    /// the complete response body. Supports both text-to-image and
    /// image-to-image, see [`Sd3Request`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails validation, the HTTP request
    /// fails, or the API returns a non-success status.
    pub async fn generate_sd3(&self, request: Sd3Request) -> Result<ImageResponse, StabilityError> {
        request.validate()?;
        log::debug!("Generating image (sd3)");

        let response = http::generate::generate_image(
            &self.http_client,
            &self.base_url,
            &self.api_key,
            Endpoint::GenerateSd3,
            request.into_form_parts(),
        )
        .await?;

        log::debug!(
            "Image generated: {} bytes, finish_reason={:?}",
            response.image_data.len(),
            response.finish_reason
        );

        Ok(response)
    }

    /// Starts an image-to-video generation.
    ///
    /// Issues a POST to `/v2beta/image-to-video`. The returned generation id
    /// is then passed to [`image_to_video_result`](Self::image_to_video_result)
    /// to poll for the finished video.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails validation, the HTTP request
    /// fails, the API returns a non-success status, or the response cannot
    /// be parsed.
    pub async fn image_to_video(
        &self,
        request: ImageToVideoRequest,
    ) -> Result<ImageToVideoResponse, StabilityError> {
        request.validate()?;
        log::debug!("Starting image-to-video generation");

        let response = http::video::start_generation(
            &self.http_client,
            &self.base_url,
            &self.api_key,
            request.into_form_parts(),
        )
        .await?;

        log::debug!("Generation started: id={}", response.id);

        Ok(response)
    }

    /// Polls for the result of an image-to-video generation.
    ///
    /// Returns `Ok(None)` while the generation is still running (HTTP 202)
    /// and `Ok(Some(bytes))` once the video is ready (HTTP 200). The client
    /// performs no scheduling of its own: the caller decides the poll
    /// cadence and when to give up.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the API answers with a
    /// status other than 200 or 202.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use stability_rs::{Client, ImageToVideoRequest};
    /// # use std::time::Duration;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("api-key".to_string());
    /// let image = std::fs::read("source-1024x576.jpg")?;
    ///
    /// let submission = client
    ///     .image_to_video(ImageToVideoRequest::new(image))
    ///     .await?;
    ///
    /// let video = loop {
    ///     if let Some(video) = client.image_to_video_result(&submission.id).await? {
    ///         break video;
    ///     }
    ///     tokio::time::sleep(Duration::from_secs(10)).await;
    /// };
    /// std::fs::write("out.mp4", &video)?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn image_to_video_result(
        &self,
        generation_id: &str,
    ) -> Result<Option<Bytes>, StabilityError> {
        if generation_id.is_empty() {
            return Err(StabilityError::InvalidInput(
                "generation_id must not be empty".to_string(),
            ));
        }
        log::debug!("Polling image-to-video result: id={generation_id}");

        let result = http::video::fetch_result(
            &self.http_client,
            &self.base_url,
            &self.api_key,
            generation_id,
        )
        .await?;

        match &result {
            Some(video) => log::debug!("Generation complete: {} bytes", video.len()),
            None => log::debug!("Generation still in progress"),
        }

        Ok(result)
    }
}
