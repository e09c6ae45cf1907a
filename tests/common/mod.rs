#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::any;
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use shortlink_proxy::domain::entities::{NewShortLink, ShortLink, UsageEvent};
use shortlink_proxy::domain::repositories::{LinkRepository, UsageRepository};
use shortlink_proxy::domain::window::LookbackWindow;
use shortlink_proxy::error::AppError;
use shortlink_proxy::infrastructure::upstream::ReqwestForwarder;
use shortlink_proxy::routes::router;
use shortlink_proxy::state::AppState;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// LinkStore kept in memory, expiring against the wall clock.
#[derive(Default)]
pub struct InMemoryLinks {
    rows: Mutex<Vec<ShortLink>>,
}

impl InMemoryLinks {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn insert(&self, tenant: &str, code: &str, destination: &str, expiry: Option<DateTime<Utc>>) {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(ShortLink::new(
            id,
            tenant.to_string(),
            code.to_string(),
            destination.to_string(),
            expiry,
            Utc::now(),
        ));
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinks {
    async fn find_active_destination(&self, code: &str) -> Result<Option<String>, AppError> {
        let now = Utc::now();
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|l| l.code == code && l.is_active_at(now))
            .min_by_key(|l| (l.created_at, l.id))
            .map(|l| l.destination.clone()))
    }

    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut rows = self.rows.lock().unwrap();

        if rows
            .iter()
            .any(|l| l.tenant == new_link.tenant && l.code == new_link.code)
        {
            return Err(AppError::conflict("Unique constraint violation", json!({})));
        }

        let link = ShortLink::new(
            rows.len() as i64 + 1,
            new_link.tenant,
            new_link.code,
            new_link.destination,
            new_link.expiry,
            Utc::now(),
        );
        rows.push(link.clone());
        Ok(link)
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.rows.lock().unwrap().iter().any(|l| l.code == code))
    }

    async fn list_by_tenant(&self, tenant: &str) -> Result<Vec<ShortLink>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.tenant == tenant)
            .cloned()
            .collect())
    }

    async fn delete(&self, tenant: &str, code: &str) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|l| !(l.tenant == tenant && l.code == code));
        Ok(rows.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// UsageLedger kept in memory.
#[derive(Default)]
pub struct InMemoryLedger {
    events: Mutex<Vec<UsageEvent>>,
}

impl InMemoryLedger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Records an event that happened `age` ago.
    pub fn seed(&self, code: &str, age: Duration) {
        let mut events = self.events.lock().unwrap();
        let id = events.len() as i64 + 1;
        events.push(UsageEvent::new(id, code.to_string(), Utc::now() - age));
    }

    pub fn total(&self, code: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.code == code)
            .count()
    }
}

#[async_trait]
impl UsageRepository for InMemoryLedger {
    async fn append(&self, code: &str) -> Result<UsageEvent, AppError> {
        let mut events = self.events.lock().unwrap();
        let event = UsageEvent::new(events.len() as i64 + 1, code.to_string(), Utc::now());
        events.push(event.clone());
        Ok(event)
    }

    async fn count(&self, code: &str, window: LookbackWindow) -> Result<i64, AppError> {
        let cutoff = window.lookback().map(|d| Utc::now() - d);
        let events = self.events.lock().unwrap();
        Ok(events
            .iter()
            .filter(|e| e.code == code && cutoff.is_none_or(|c| e.occurred_at >= c))
            .count() as i64)
    }
}

/// Ledger whose every statement fails, standing in for an unavailable datastore.
pub struct FailingLedger;

#[async_trait]
impl UsageRepository for FailingLedger {
    async fn append(&self, _code: &str) -> Result<UsageEvent, AppError> {
        Err(AppError::persistence("Database error", json!({})))
    }

    async fn count(&self, _code: &str, _window: LookbackWindow) -> Result<i64, AppError> {
        Err(AppError::persistence("Database error", json!({})))
    }
}

/// Echoes what arrived at the destination as JSON.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    (
        StatusCode::OK,
        [("x-upstream", "echo")],
        axum::Json(json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "host": header("host"),
            "forwarded_host": header("x-forwarded-host"),
            "accept": header("accept"),
            "body": String::from_utf8_lossy(&body),
        })),
    )
}

/// Starts a local destination server and returns its base URL.
///
/// `/moved` answers with a redirect so callers can check it is not followed.
pub async fn spawn_upstream() -> String {
    let app = Router::new()
        .route(
            "/moved",
            any(|| async {
                (
                    StatusCode::FOUND,
                    [("location", "https://elsewhere.example/")],
                )
            }),
        )
        .fallback(echo);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Starts a raw TCP destination that sends its status line and headers, then
/// `first` right away and `rest` only after `pause`.
///
/// With `first` empty and a long `pause`, the response head itself is held back.
pub async fn spawn_slow_upstream(
    head: &'static str,
    first: &'static str,
    pause: std::time::Duration,
    rest: &'static str,
) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;

                if !head.is_empty() {
                    socket.write_all(head.as_bytes()).await.unwrap();
                    socket.write_all(first.as_bytes()).await.unwrap();
                    socket.flush().await.unwrap();
                }

                tokio::time::sleep(pause).await;

                let _ = socket.write_all(rest.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

/// Builds a test server over the given stores with a real forwarder.
pub fn make_server(links: Arc<dyn LinkRepository>, ledger: Arc<dyn UsageRepository>) -> TestServer {
    make_server_with_timeout(links, ledger, std::time::Duration::from_secs(5))
}

/// Same as [`make_server`] with a chosen upstream timeout.
pub fn make_server_with_timeout(
    links: Arc<dyn LinkRepository>,
    ledger: Arc<dyn UsageRepository>,
    timeout: std::time::Duration,
) -> TestServer {
    let forwarder = ReqwestForwarder::new(timeout).unwrap();
    let state = AppState::new(links, ledger, Arc::new(forwarder), 1024 * 1024);
    TestServer::new(router(state)).unwrap()
}

/// Polls the ledger until `code` has `expected` events, since appends are detached.
pub async fn wait_for_count(ledger: &InMemoryLedger, code: &str, expected: usize) {
    for _ in 0..200 {
        if ledger.total(code) == expected {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    assert_eq!(ledger.total(code), expected);
}

/// LinkStore whose every statement fails.
pub struct FailingLinks;

#[async_trait]
impl LinkRepository for FailingLinks {
    async fn find_active_destination(&self, _code: &str) -> Result<Option<String>, AppError> {
        Err(AppError::persistence("Database error", json!({})))
    }

    async fn create(&self, _new_link: NewShortLink) -> Result<ShortLink, AppError> {
        Err(AppError::persistence("Database error", json!({})))
    }

    async fn code_exists(&self, _code: &str) -> Result<bool, AppError> {
        Err(AppError::persistence("Database error", json!({})))
    }

    async fn list_by_tenant(&self, _tenant: &str) -> Result<Vec<ShortLink>, AppError> {
        Err(AppError::persistence("Database error", json!({})))
    }

    async fn delete(&self, _tenant: &str, _code: &str) -> Result<bool, AppError> {
        Err(AppError::persistence("Database error", json!({})))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::persistence("Database error", json!({})))
    }
}
