//! HTTP behavior against a local one-shot server.

use gemini_client::{GeminiClient, GeminiError, GenerateContentRequest};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve one canned response and hand back the raw request.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });

    (base_url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

#[tokio::test]
async fn test_generate_text_returns_candidate_text() {
    let (base_url, server) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"candidates":[{"content":{"parts":[{"text":"{\"routes\":[]}"}]}}]}"#,
    )
    .await;

    let client = GeminiClient::new("test-key").with_base_url(base_url);
    let text = client
        .generate_text(&GenerateContentRequest::prompt("Plan Recife"))
        .await
        .unwrap();

    assert_eq!(text, r#"{"routes":[]}"#);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /models/gemini-2.5-flash:generateContent"));
    assert!(request.to_lowercase().contains("x-goog-api-key: test-key"));
    assert!(request.contains(r#""responseMimeType":"application/json""#));
    assert!(request.contains("Plan Recife"));
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let (base_url, server) = serve_once(
        "HTTP/1.1 403 Forbidden",
        r#"{"error":{"message":"API key not valid"}}"#,
    )
    .await;

    let client = GeminiClient::new("bad-key").with_base_url(base_url);
    let err = client
        .generate_text(&GenerateContentRequest::prompt("x"))
        .await
        .unwrap_err();

    match err {
        GeminiError::Api { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("expected API error, got {:?}", other),
    }

    server.await.unwrap();
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK", "not json").await;

    let client = GeminiClient::new("k").with_base_url(base_url);
    let err = client
        .generate_content(&GenerateContentRequest::prompt("x"))
        .await
        .unwrap_err();

    assert!(matches!(err, GeminiError::Parse(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::new("k").with_base_url(format!("http://{}", addr));
    let err = client
        .generate_content(&GenerateContentRequest::prompt("x"))
        .await
        .unwrap_err();

    assert!(matches!(err, GeminiError::Network(_)));
}
