#![allow(dead_code)]

use activity_roster::{InMemoryRosterStore, SharedStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A roster service bound to an ephemeral port, stopped on drop.
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn activities(&self) -> serde_json::Value {
        let response = self.client.get(self.url("/activities")).send().await.unwrap();
        assert_eq!(response.status(), 200);
        response.json().await.unwrap()
    }

    pub async fn participants(&self, activity: &str) -> Vec<String> {
        let activities = self.activities().await;
        serde_json::from_value(activities[activity]["participants"].clone()).unwrap()
    }

    pub async fn signup(&self, activity: &str, email: &str) -> reqwest::Response {
        self.client
            .post(self.url(&format!("/activities/{}/signup", activity)))
            .query(&[("email", email)])
            .send()
            .await
            .unwrap()
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> reqwest::Response {
        self.client
            .delete(self.url(&format!("/activities/{}/unregister", activity)))
            .query(&[("email", email)])
            .send()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

pub async fn spawn_server() -> TestServer {
    spawn_server_with(InMemoryRosterStore::with_default_catalog()).await
}

/// Each test gets its own store, so no state leaks between tests.
pub async fn spawn_server_with(store: InMemoryRosterStore) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let store: SharedStore = Arc::new(store);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let handle = tokio::spawn(async move {
        let shutdown = async move {
            let _ = shutdown_rx.await;
        };
        if let Err(e) = activity_roster::serve(listener, store, shutdown).await {
            eprintln!("test server error: {}", e);
        }
    });

    TestServer {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
        shutdown_tx: Some(shutdown_tx),
        handle: Some(handle),
    }
}
