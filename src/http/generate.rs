//! Wire calls for the synchronous stable-image generation endpoints.

use crate::errors::StabilityError;
use crate::http::common::{ACCEPT_IMAGE, Endpoint, bearer_header, construct_endpoint_url};
use crate::http::error_helpers::check_response;
use crate::http::loud_wire;
use crate::multipart::{FormPart, into_form};
use crate::response::ImageResponse;
use reqwest::Client as ReqwestClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

/// Header carrying the reason generation stopped, e.g. `SUCCESS` or
/// `CONTENT_FILTERED`.
const FINISH_REASON_HEADER: &str = "finish-reason";
/// Header carrying the seed the image was actually generated with.
const SEED_HEADER: &str = "seed";

fn header_string(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}

/// Issues one synchronous image generation request.
///
/// Both generate endpoints share this call: multipart POST with bearer auth
/// and `Accept: image/*`, full-body await, then the raw image bytes wrapped
/// with header-derived metadata.
///
/// # Errors
///
/// Returns an error if the HTTP request fails or the response status is not
/// successful.
pub(crate) async fn generate_image(
    http_client: &ReqwestClient,
    base_url: &str,
    api_key: &str,
    endpoint: Endpoint<'_>,
    parts: Vec<FormPart>,
) -> Result<ImageResponse, StabilityError> {
    let url = construct_endpoint_url(base_url, &endpoint);

    let request_id = loud_wire::next_request_id();
    loud_wire::log_request(request_id, "POST", &url, Some(&parts));

    let response = http_client
        .post(&url)
        .header(AUTHORIZATION, bearer_header(api_key))
        .header(ACCEPT, ACCEPT_IMAGE)
        .multipart(into_form(parts)?)
        .send()
        .await?;

    loud_wire::log_response_status(request_id, response.status().as_u16());

    let response = check_response(response).await?;

    let content_type = header_string(&response, CONTENT_TYPE.as_str());
    let finish_reason = header_string(&response, FINISH_REASON_HEADER);
    let seed = header_string(&response, SEED_HEADER);
    let image_data = response.bytes().await?;

    loud_wire::log_binary_body(request_id, image_data.len(), content_type.as_deref());

    Ok(ImageResponse {
        image_data,
        content_type,
        finish_reason,
        seed,
    })
}
