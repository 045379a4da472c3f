use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cutout::{ClientConfig, CutoutClient, CutoutError, RemovalOptions};

fn client_for(base_url: &str) -> CutoutClient {
    CutoutClient::new(ClientConfig::new().with_base_url(base_url)).unwrap()
}

fn success_body() -> serde_json::Value {
    json!({
        "success": true,
        "result": {
            "filename": "shirt_nobg.png",
            "download_url": "/api/download/shirt_nobg.png",
            "model_used": "birefnet-general",
            "processing_time": 3.17,
            "size_bytes": 204800
        },
        "variants": [
            {
                "filename": "shirt_nobg_white.png",
                "download_url": "/api/download/shirt_nobg_white.png",
                "size_bytes": 190000
            }
        ]
    })
}

#[tokio::test]
async fn remove_background_decodes_result_fields() {
    let server = MockServer::start().await;
    let image_bytes = b"fake png bytes".to_vec();

    Mock::given(method("POST"))
        .and(path("/api/remove-background-base64"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "image_base64": BASE64.encode(&image_bytes),
            "model": "ultra",
            "positioning": "smart",
            "enhance": true,
            "create_variants": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let outcome = client
        .removal()
        .remove_background_bytes(&image_bytes, &RemovalOptions::new())
        .await
        .unwrap();

    assert_eq!(outcome.result.filename, "shirt_nobg.png");
    assert_eq!(outcome.result.download_url, "/api/download/shirt_nobg.png");
    assert_eq!(outcome.result.model_used, "birefnet-general");
    assert_eq!(outcome.result.processing_time_seconds, 3.17);
    assert_eq!(outcome.result.size_bytes, 204800);
    assert_eq!(outcome.variants.len(), 1);
    assert_eq!(outcome.variants[0].filename, "shirt_nobg_white.png");
}

#[tokio::test]
async fn remove_background_sends_custom_options() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/remove-background-base64"))
        .and(body_partial_json(json!({
            "model": "advanced",
            "positioning": "center",
            "enhance": false,
            "create_variants": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let options = RemovalOptions::new()
        .with_model("advanced")
        .with_positioning("center")
        .with_enhance(false)
        .with_variants(false);

    let client = client_for(&server.uri());
    client
        .removal()
        .remove_background_bytes(b"bytes", &options)
        .await
        .unwrap();
}

#[tokio::test]
async fn server_failure_carries_reported_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/remove-background-base64"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "success": false, "error": "disk full" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client
        .removal()
        .remove_background_bytes(b"bytes", &RemovalOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.server_message(), Some("disk full"));
}

#[tokio::test]
async fn server_failure_without_message_defaults_to_unknown_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/remove-background-base64"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client
        .removal()
        .remove_background_bytes(b"bytes", &RemovalOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.server_message(), Some("Unknown error"));
}

#[tokio::test]
async fn empty_response_body_is_reported_distinctly() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/remove-background-base64"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client
        .removal()
        .remove_background_bytes(b"bytes", &RemovalOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, CutoutError::EmptyResponse));
}

#[tokio::test]
async fn success_without_result_is_a_decoding_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/remove-background-base64"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client
        .removal()
        .remove_background_bytes(b"bytes", &RemovalOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, CutoutError::Decoding(_)));
}

#[tokio::test]
async fn empty_base_url_fails_before_any_network_call() {
    let client = client_for("");

    let err = client
        .removal()
        .remove_background_bytes(b"bytes", &RemovalOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, CutoutError::UrlConstruction(_)));

    let err = client.files().download("/files/out.png").await.unwrap_err();
    assert!(matches!(err, CutoutError::UrlConstruction(_)));
}

#[tokio::test]
async fn download_requests_base_url_plus_relative_path() {
    let server = MockServer::start().await;
    let payload = vec![0x89, 0x50, 0x4e, 0x47];

    Mock::given(method("GET"))
        .and(path("/files/out.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let bytes = client.files().download("/files/out.png").await.unwrap();
    assert_eq!(bytes, payload);
}

#[tokio::test]
async fn download_image_rejects_non_image_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/out.png"))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not an image"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client.files().download_image("/files/out.png").await.unwrap_err();
    assert!(matches!(err, CutoutError::ImageDecoding(_)));
}

#[tokio::test]
async fn download_by_name_hits_download_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/download/shirt_nobg.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2, 3]))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let bytes = client.files().download_by_name("shirt_nobg.png").await.unwrap();
    assert_eq!(bytes, vec![1, 2, 3]);
}

#[tokio::test]
async fn health_status_and_models_decode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "timestamp": 1724900000.5,
            "version": "1.0.0",
            "ready": true
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "server": "running",
            "timestamp": 1724900001.0,
            "ultra_model_loaded": true,
            "advanced_model_loaded": false,
            "version": "1.0.0",
            "endpoints": ["POST /api/remove-background-base64"],
            "ultra_model": "birefnet-general",
            "advanced_model": "not_loaded"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "models": {
                "ultra": {
                    "name": "ULTRA AI Model",
                    "description": "Automatic optimization",
                    "features": ["Smart positioning", "Ultra quality"],
                    "recommended": true
                },
                "advanced": {
                    "name": "Advanced Model",
                    "description": "Manual model selection",
                    "features": ["Size optimization"],
                    "recommended": false
                }
            },
            "default": "ultra"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());

    let health = client.service().health().await.unwrap();
    assert!(health.is_healthy());

    let status = client.service().status().await.unwrap();
    assert!(status.ultra_model_loaded);
    assert_eq!(status.ultra_model.as_deref(), Some("birefnet-general"));

    let catalog = client.service().models().await.unwrap();
    assert_eq!(catalog.default_model, "ultra");
    assert_eq!(catalog.models.len(), 2);
    assert!(catalog.models["ultra"].recommended);
}

#[tokio::test]
async fn transport_failure_is_reported_as_network_error() {
    // Nothing listening on this port.
    let client = client_for("http://127.0.0.1:1");

    let err = client
        .removal()
        .remove_background_bytes(b"bytes", &RemovalOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, CutoutError::Transport(_)));
}
