//! Integration tests for the synchronous image generation endpoints,
//! driving the full client against a mock server.

use stability_rs::{AspectRatio, Client, Sd3Model, Sd3Request, StabilityError, UltraRequest};
use wiremock::matchers::{body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::builder("test-key".to_string())
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_ultra_success_wraps_bytes_with_header_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2beta/stable-image/generate/ultra"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("accept", "image/*"))
        .and(header_regex(
            "content-type",
            "^multipart/form-data; boundary=.+",
        ))
        .and(body_string_contains(r#"name="prompt""#))
        .and(body_string_contains("a lighthouse on a cliff at dusk"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"fake-png-bytes".as_slice(), "image/png")
                .insert_header("finish-reason", "SUCCESS")
                .insert_header("seed", "1234"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate_ultra(UltraRequest::new("a lighthouse on a cliff at dusk"))
        .await
        .unwrap();

    assert_eq!(response.image_data.as_ref(), b"fake-png-bytes");
    assert_eq!(response.content_type.as_deref(), Some("image/png"));
    assert_eq!(response.finish_reason.as_deref(), Some("SUCCESS"));
    assert_eq!(response.seed.as_deref(), Some("1234"));
}

#[tokio::test]
async fn test_ultra_sends_optional_fields_when_set() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2beta/stable-image/generate/ultra"))
        .and(body_string_contains(r#"name="aspect_ratio""#))
        .and(body_string_contains("16:9"))
        .and(body_string_contains(r#"name="seed""#))
        .and(body_string_contains("42"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"png".as_slice(), "image/png"))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .generate_ultra(
            UltraRequest::new("a red bicycle")
                .with_aspect_ratio(AspectRatio::Ratio16x9)
                .with_seed(42),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_ultra_missing_metadata_headers_are_absent_not_empty() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2beta/stable-image/generate/ultra"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"png".as_slice(), "image/png"))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate_ultra(UltraRequest::new("a red bicycle"))
        .await
        .unwrap();

    assert_eq!(response.finish_reason, None);
    assert_eq!(response.seed, None);
}

#[tokio::test]
async fn test_ultra_error_carries_status_and_exact_body() {
    let server = MockServer::start().await;
    let body = r#"{"name":"bad_request","errors":["aspect_ratio: invalid value"]}"#;

    Mock::given(method("POST"))
        .and(path("/v2beta/stable-image/generate/ultra"))
        .respond_with(ResponseTemplate::new(400).set_body_string(body))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_ultra(UltraRequest::new("a red bicycle"))
        .await
        .unwrap_err();

    match err {
        StabilityError::Api {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 400);
            assert_eq!(message, body);
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_sd3_posts_to_its_own_path_with_model_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2beta/stable-image/generate/sd3"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_string_contains(r#"name="model""#))
        .and(body_string_contains("sd3-large-turbo"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"jpeg".as_slice(), "image/jpeg"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate_sd3(Sd3Request::new("a castle").with_model(Sd3Model::Sd3LargeTurbo))
        .await
        .unwrap();

    assert_eq!(response.image_data.as_ref(), b"jpeg");
}

#[tokio::test]
async fn test_sd3_image_to_image_sends_source_image_as_file_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2beta/stable-image/generate/sd3"))
        .and(body_string_contains(
            r#"name="image"; filename="image.jpg""#,
        ))
        .and(body_string_contains("fake-jpeg-source"))
        .and(body_string_contains(r#"name="strength""#))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"jpeg".as_slice(), "image/jpeg"))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .generate_sd3(
            Sd3Request::new("the same castle in winter")
                .with_image(b"fake-jpeg-source".to_vec())
                .with_strength(0.6),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_request_fails_before_any_http_call() {
    let server = MockServer::start().await;
    // No mock mounted: a request reaching the server would 404 into an Api
    // error, not InvalidInput.
    let err = client_for(&server)
        .generate_ultra(UltraRequest::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, StabilityError::InvalidInput(_)));
}
