// src/services/status.rs

//! Status source: fetches the current busyness of every location.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::{ClientConfig, StatusSnapshot};
use crate::utils::http;

/// Trait for location status backends.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch one snapshot of all location statuses.
    ///
    /// A single request; no retries.
    async fn fetch(&self) -> Result<StatusSnapshot>;
}

/// Status source backed by the remote HTTP status service.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    client: Client,
    endpoint: String,
}

impl HttpStatusSource {
    /// Create a source for the configured endpoint.
    ///
    /// Fails with `AppError::Validation` for a zero timeout or a non-http(s)
    /// endpoint.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_client(
            http::create_client(config)?,
            config.endpoint.clone(),
        ))
    }

    /// Create a source with an existing client.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch(&self) -> Result<StatusSnapshot> {
        log::info!("Fetching location status from {}", self.endpoint);
        let body = http::fetch_text(&self.client, &self.endpoint).await?;
        let snapshot = StatusSnapshot::from_json(&body)?;
        log::info!("Received {} status records", snapshot.records.len());
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::error::AppError;

    /// Serve one canned HTTP response on a local port and return its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/locationstatus")
    }

    fn source_for(endpoint: String) -> HttpStatusSource {
        let config = ClientConfig {
            endpoint,
            timeout_secs: 5,
            ..ClientConfig::default()
        };
        HttpStatusSource::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_decodes_records() {
        let url = serve_once(
            "200 OK",
            r#"[{"locationid":2,"name":"Knollcrest","statusaverage":2.5,"maxcapacity":500}]"#,
        )
        .await;

        let snapshot = source_for(url).fetch().await.unwrap();
        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.records[0].location_id, 2);
        assert_eq!(snapshot.records[0].status_average, Some(2.5));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let url = serve_once("503 Service Unavailable", "[]").await;

        let err = source_for(url).fetch().await.unwrap_err();
        assert!(matches!(err, AppError::Status { status: 503, .. }));
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_fetch_non_array_body() {
        let url = serve_once("200 OK", r#"{"error":"down"}"#).await;

        let err = source_for(url).fetch().await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source_for(format!("http://{addr}/locationstatus"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Http(_)));
    }

    #[tokio::test]
    async fn test_fetch_times_out_on_silent_server() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(std::time::Duration::from_secs(10)).await;
        });

        let config = ClientConfig {
            endpoint: format!("http://{addr}/locationstatus"),
            timeout_secs: 1,
            ..ClientConfig::default()
        };
        let err = HttpStatusSource::new(&config)
            .unwrap()
            .fetch()
            .await
            .unwrap_err();

        assert!(matches!(&err, AppError::Http(e) if e.is_timeout()));
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn test_new_rejects_zero_timeout() {
        let config = ClientConfig {
            endpoint: "http://127.0.0.1:8080/locationstatus".to_string(),
            timeout_secs: 0,
            ..ClientConfig::default()
        };

        let err = HttpStatusSource::new(&config).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_new_rejects_non_http_endpoint() {
        let config = ClientConfig {
            endpoint: "ftp://127.0.0.1/locationstatus".to_string(),
            ..ClientConfig::default()
        };

        let err = HttpStatusSource::new(&config).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
