//! A Rust client library for the Stability AI REST API.
//!
//! Covers the synchronous stable-image generation endpoints (Ultra and SD3),
//! which answer with the image bytes directly, and the asynchronous
//! image-to-video endpoint pair, where a submission returns a generation id
//! that is polled until the video is ready.
//!
//! The caller supplies the API key directly ("direct mode"); it is sent as a
//! bearer token on every request. There is no retry logic and no internal
//! polling loop: each method is one HTTP call, and the caller owns the poll
//! cadence for video results.
//!
//! # Quick start
//!
//! ```no_run
//! use stability_rs::{AspectRatio, Client, UltraRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(std::env::var("STABILITY_API_KEY")?);
//!
//! let response = client
//!     .generate_ultra(
//!         UltraRequest::new("a lighthouse on a cliff at dusk")
//!             .with_aspect_ratio(AspectRatio::Ratio16x9),
//!     )
//!     .await?;
//!
//! std::fs::write("lighthouse.png", &response.image_data)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Wire debugging
//!
//! Set the `LOUD_WIRE` environment variable to dump request/response traffic
//! to stderr; binary payloads are summarized rather than printed.

mod client;
mod errors;
pub(crate) mod http;
pub(crate) mod multipart;
mod request;
mod response;

pub use client::{Client, ClientBuilder};
pub use errors::StabilityError;
pub use request::{
    AspectRatio, GenerationMode, ImageToVideoRequest, OutputFormat, Sd3Model, Sd3Request,
    UltraRequest,
};
pub use response::{ImageResponse, ImageToVideoResponse};
