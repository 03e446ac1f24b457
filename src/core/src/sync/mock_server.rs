use std::time::Duration;

use log::debug;

use crate::error_handling::types::SyncError;
use crate::sync::source::{QuoteSource, ServerPost};

const MOCK_POSTS: &str = r#"[
  {
    "userId": 1,
    "id": 1,
    "title": "sunt aut facere repellat provident occaecati excepturi optio reprehenderit",
    "body": "quia et suscipit suscipit recusandae consequuntur expedita et cum reprehenderit molestiae ut ut quas totam nostrum rerum est autem sunt rem eveniet architecto"
  },
  {
    "userId": 1,
    "id": 2,
    "title": "qui est esse",
    "body": "est rerum tempore vitae sequi sint nihil reprehenderit dolor beatae ea dolores neque fugiat blanditiis voluptate porro vel nihil molestiae ut reiciendis qui aperiam non debitis possimus qui neque nisi nulla"
  },
  {
    "userId": 1,
    "id": 3,
    "title": "ea molestias quasi exercitationem repellat qui ipsa sit aut",
    "body": "et iusto sed quo iure voluptatem occaecati omnis eligendi aut ad voluptatem doloribus vel accusantium quis pariatur molestiae porro eius odio et labore et velit aut"
  }
]"#;

/// Hardcoded stand-in for the remote posts endpoint.
///
/// Serves the same three posts on every fetch, optionally after a delay, or
/// fails every fetch when built with [`MockServer::unreachable`].
#[derive(Debug, Clone, Default)]
pub struct MockServer {
    latency: Duration,
    unreachable: bool,
}

impl MockServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn unreachable() -> Self {
        Self {
            latency: Duration::ZERO,
            unreachable: true,
        }
    }
}

impl QuoteSource for MockServer {
    async fn fetch_posts(&self) -> Result<Vec<ServerPost>, SyncError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.unreachable {
            return Err(SyncError::FetchFailed("mock server is unreachable".into()));
        }
        let posts: Vec<ServerPost> =
            serde_json::from_str(MOCK_POSTS).map_err(|e| SyncError::FetchFailed(e.to_string()))?;
        debug!("Mock server returned {} post(s)", posts.len());
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_three_posts() {
        let posts = MockServer::new().fetch_posts().await.unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[1].title, "qui est esse");
        assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn latency_is_simulated() {
        let started = tokio::time::Instant::now();
        MockServer::new()
            .with_latency(Duration::from_millis(500))
            .fetch_posts()
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn unreachable_server_fails() {
        let result = MockServer::unreachable().fetch_posts().await;
        assert!(matches!(result, Err(SyncError::FetchFailed(_))));
    }
}
