/// Represents the API version to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApiVersion {
    /// V2 Beta API version (current)
    V2Beta,
}

impl ApiVersion {
    const fn as_str(self) -> &'static str {
        match self {
            Self::V2Beta => "v2beta",
        }
    }
}

/// Host the client talks to unless the builder overrides it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.stability.ai";

/// `Accept` value for the synchronous image endpoints.
pub(crate) const ACCEPT_IMAGE: &str = "image/*";
/// `Accept` value for the video result endpoint.
pub(crate) const ACCEPT_VIDEO: &str = "video/*";

/// `Authorization` header value for the caller-supplied API key.
///
/// Direct mode only: the key goes straight to the provider, with no proxy
/// intermediary and no token exchange.
pub(crate) fn bearer_header(api_key: &str) -> String {
    format!("Bearer {api_key}")
}

/// Represents the generation endpoints of the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Endpoint<'a> {
    /// Synchronous image generation, Stable Image Ultra
    GenerateUltra,
    /// Synchronous image generation, Stable Diffusion 3
    GenerateSd3,
    /// Asynchronous image-to-video submission
    ImageToVideo,
    /// Poll for the result of an image-to-video generation
    ImageToVideoResult { generation_id: &'a str },
}

impl Endpoint<'_> {
    /// Constructs the URL path for this endpoint.
    ///
    /// The generation id is caller-supplied, so it is percent-encoded before
    /// entering the path.
    fn to_path(&self, version: ApiVersion) -> String {
        match self {
            Self::GenerateUltra => {
                format!("/{}/stable-image/generate/ultra", version.as_str())
            }
            Self::GenerateSd3 => {
                format!("/{}/stable-image/generate/sd3", version.as_str())
            }
            Self::ImageToVideo => format!("/{}/image-to-video", version.as_str()),
            Self::ImageToVideoResult { generation_id } => {
                format!(
                    "/{}/image-to-video/result/{}",
                    version.as_str(),
                    urlencoding::encode(generation_id)
                )
            }
        }
    }
}

/// Constructs the full URL for an endpoint against the given base URL.
#[must_use]
pub(crate) fn construct_endpoint_url(base_url: &str, endpoint: &Endpoint<'_>) -> String {
    let path = endpoint.to_path(ApiVersion::V2Beta);
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
