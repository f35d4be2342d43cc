//! Response bodies decoded from the generation endpoints.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Response of the synchronous stable-image generation endpoints.
///
/// The image arrives as the raw response body; the metadata comes from
/// response headers and is absent when the server did not send the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResponse {
    /// The generated image bytes, in the requested output format.
    pub image_data: Bytes,
    /// Value of the `Content-Type` response header.
    pub content_type: Option<String>,
    /// Value of the `finish-reason` response header, e.g. `SUCCESS` or
    /// `CONTENT_FILTERED`.
    pub finish_reason: Option<String>,
    /// Value of the `seed` response header: the seed the image was actually
    /// generated with.
    pub seed: Option<String>,
}

/// Response of an image-to-video submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageToVideoResponse {
    /// The id of the generation, used to poll for its result.
    /// String (GenerationID) = 64 characters.
    pub id: String,
}
