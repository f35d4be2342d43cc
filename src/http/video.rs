//! Wire calls for the asynchronous image-to-video endpoint pair.

use crate::errors::StabilityError;
use crate::http::common::{ACCEPT_VIDEO, Endpoint, bearer_header, construct_endpoint_url};
use crate::http::error_helpers::{check_response, deserialize_with_context, unsuccessful_request};
use crate::http::loud_wire;
use crate::multipart::{FormPart, into_form};
use crate::response::ImageToVideoResponse;
use bytes::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as ReqwestClient, StatusCode};

/// Submits an image-to-video generation.
///
/// # Errors
///
/// Returns an error if the HTTP request fails, the response status is not
/// successful, or the response cannot be parsed as JSON.
pub(crate) async fn start_generation(
    http_client: &ReqwestClient,
    base_url: &str,
    api_key: &str,
    parts: Vec<FormPart>,
) -> Result<ImageToVideoResponse, StabilityError> {
    let url = construct_endpoint_url(base_url, &Endpoint::ImageToVideo);

    let request_id = loud_wire::next_request_id();
    loud_wire::log_request(request_id, "POST", &url, Some(&parts));

    let response = http_client
        .post(&url)
        .header(AUTHORIZATION, bearer_header(api_key))
        .multipart(into_form(parts)?)
        .send()
        .await?;

    loud_wire::log_response_status(request_id, response.status().as_u16());

    let response = check_response(response).await?;
    let response_text = response.text().await.map_err(StabilityError::Http)?;

    loud_wire::log_response_body(request_id, &response_text);

    deserialize_with_context(&response_text, "ImageToVideoResponse")
}

/// Polls for the result of an image-to-video generation.
///
/// Three outcomes, keyed on the status code: 202 means the generation is
/// still running (`Ok(None)`), 200 carries the finished video bytes, and
/// anything else is an unsuccessful request.
///
/// # Errors
///
/// Returns an error if the HTTP request fails or the status is neither 200
/// nor 202.
pub(crate) async fn fetch_result(
    http_client: &ReqwestClient,
    base_url: &str,
    api_key: &str,
    generation_id: &str,
) -> Result<Option<Bytes>, StabilityError> {
    let url = construct_endpoint_url(base_url, &Endpoint::ImageToVideoResult { generation_id });

    let request_id = loud_wire::next_request_id();
    loud_wire::log_request(request_id, "GET", &url, None);

    let response = http_client
        .get(&url)
        .header(AUTHORIZATION, bearer_header(api_key))
        .header(ACCEPT, ACCEPT_VIDEO)
        .send()
        .await?;

    let status = response.status();
    loud_wire::log_response_status(request_id, status.as_u16());

    if status == StatusCode::ACCEPTED {
        return Ok(None);
    }
    if status == StatusCode::OK {
        let video = response.bytes().await?;
        loud_wire::log_binary_body(request_id, video.len(), None);
        return Ok(Some(video));
    }
    Err(unsuccessful_request(response).await)
}
