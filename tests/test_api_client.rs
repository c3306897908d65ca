use dryness::api::ApiClient;
use dryness::api::client::{DELETE_FAILED, HISTORY_FETCH_FAILED};
use dryness::exceptions::DrynessError;
use dryness::models::Classification;
use dryness::upload::UploadImage;
use mockito::{Matcher, Server};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

fn sample_image(dir: &std::path::Path) -> UploadImage {
    let path = dir.join("slice.png");
    std::fs::write(&path, PNG_BYTES).unwrap();
    UploadImage::from_path(&path).unwrap()
}

#[tokio::test]
async fn test_predict_sends_mime_type_and_parses_result() {
    let temp = tempfile::tempdir().unwrap();
    let image = sample_image(temp.path());
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/predict")
        .match_body(Matcher::Regex("(?i)content-type: image/png".into()))
        .with_status(200)
        .with_body(r#"{"classification": "Basah", "accuracy": 64, "filename": "slice.png"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/", server.url()));
    let prediction = client.predict(&image).await.unwrap();

    assert_eq!(prediction.classification(), Classification::Wet);
    assert_eq!(prediction.accuracy, Some(64.0));
    assert_eq!(prediction.dryness_level, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_predict_status_without_error_field() {
    let temp = tempfile::tempdir().unwrap();
    let image = sample_image(temp.path());
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/predict")
        .with_status(413)
        .with_body(r#"{"message": "too big"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url());
    let err = client.predict(&image).await.unwrap_err();
    assert!(matches!(err, DrynessError::Api(ref m) if m == "Error 413"));
}

#[tokio::test]
async fn test_history_decodes_records() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/history")
        .with_status(200)
        .with_body(
            r#"[{"id": 2, "filename": "b.jpg", "classification": "Sedang", "accuracy": 0.5,
                 "drynessLevel": 40, "created_at": "2025-01-02 08:00:00"}]"#,
        )
        .create_async()
        .await;

    let records = ApiClient::new(&server.url()).history().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 2);
    assert_eq!(records[0].classification(), Classification::Medium);
}

#[tokio::test]
async fn test_history_keeps_records_with_null_accuracy() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/history")
        .with_status(200)
        .with_body(
            r#"[{"id": 1, "filename": "a.jpg", "classification": "Kering", "accuracy": null,
                 "drynessLevel": 70, "created_at": "2025-01-02 08:00:00"},
                {"id": 2, "filename": "b.jpg", "classification": "Basah", "accuracy": 0.4,
                 "created_at": "2025-01-02 09:00:00"}]"#,
        )
        .create_async()
        .await;

    let records = ApiClient::new(&server.url()).history().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].accuracy, None);
    assert_eq!(records[1].accuracy, Some(0.4));
}

#[tokio::test]
async fn test_history_malformed_body_is_generic_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/history")
        .with_status(200)
        .with_body(r#"{"items": []}"#)
        .create_async()
        .await;

    let err = ApiClient::new(&server.url()).history().await.unwrap_err();
    assert_eq!(err.to_string(), HISTORY_FETCH_FAILED);
}

#[tokio::test]
async fn test_delete_accepts_empty_ok_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/history/11")
        .with_status(204)
        .create_async()
        .await;

    ApiClient::new(&server.url()).delete(11).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_server_error() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/history/11")
        .with_status(500)
        .create_async()
        .await;

    let err = ApiClient::new(&server.url()).delete(11).await.unwrap_err();
    assert_eq!(err.to_string(), DELETE_FAILED);
}

#[tokio::test]
async fn test_unreachable_server_is_api_error() {
    let temp = tempfile::tempdir().unwrap();
    let image = sample_image(temp.path());
    // Port 9 (discard) is not expected to accept HTTP connections.
    let client = ApiClient::new("http://127.0.0.1:9");

    let err = client.predict(&image).await.unwrap_err();
    assert!(matches!(err, DrynessError::Api(ref m) if m.starts_with("Could not reach")));
    assert_eq!(
        client.history().await.unwrap_err().to_string(),
        HISTORY_FETCH_FAILED
    );
}
