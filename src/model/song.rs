//! Song selection: result type, the resolution step and per-screen song state

use futures::future::BoxFuture;
use thiserror::Error;

/// Reasons a song selection can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SongError {
    #[error("Song input cannot be empty")]
    EmptyInput,

    /// Reserved for a real catalog lookup; nothing produces it yet.
    #[allow(dead_code)]
    #[error("Song lookup failed: {0}")]
    Lookup(String),
}

/// Outcome of one confirmation attempt.
///
/// `success` implies `song_id` and `song_name` are set; otherwise `error` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongSelectionResult {
    pub success: bool,
    pub song_id: Option<String>,
    pub song_name: Option<String>,
    pub error: Option<String>,
}

impl SongSelectionResult {
    pub fn selected(name: &str) -> Self {
        Self {
            success: true,
            song_id: Some(name.to_string()),
            song_name: Some(name.to_string()),
            error: None,
        }
    }

    pub fn failed(error: SongError) -> Self {
        Self {
            success: false,
            song_id: None,
            song_name: None,
            error: Some(error.to_string()),
        }
    }
}

/// Resolve free-text input into a song.
///
/// No catalog is queried: the trimmed input is echoed back as both id and name.
pub async fn select_song(input: &str) -> SongSelectionResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return SongSelectionResult::failed(SongError::EmptyInput);
    }

    tracing::debug!(song = trimmed, "Song selection requested");
    SongSelectionResult::selected(trimmed)
}

/// Seam for whatever turns a query into a song
pub trait SongResolver: Send + Sync {
    fn resolve<'a>(&'a self, query: &'a str) -> BoxFuture<'a, anyhow::Result<SongSelectionResult>>;
}

/// Resolver backed by [`select_song`]
#[derive(Clone, Copy, Debug, Default)]
pub struct StubSongResolver;

impl SongResolver for StubSongResolver {
    fn resolve<'a>(&'a self, query: &'a str) -> BoxFuture<'a, anyhow::Result<SongSelectionResult>> {
        Box::pin(async move { Ok(select_song(query).await) })
    }
}

/// Song section state for one screen
#[derive(Clone, Debug, Default)]
pub struct SongState {
    pub query: String,
    /// Confirmed songs in insertion order; duplicates allowed
    pub selected_songs: Vec<String>,
    pub is_loading: bool,
    pub selected_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn select_song_trims_and_echoes() {
        let result = select_song("  Bohemian Rhapsody \t").await;
        assert_eq!(result, SongSelectionResult::selected("Bohemian Rhapsody"));
        assert!(result.success);
        assert_eq!(result.song_id.as_deref(), Some("Bohemian Rhapsody"));
        assert_eq!(result.song_name.as_deref(), Some("Bohemian Rhapsody"));
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn select_song_rejects_blank_input() {
        for input in ["", "   ", "\n\t"] {
            let result = select_song(input).await;
            assert!(!result.success);
            assert!(result.song_id.is_none() && result.song_name.is_none());
            assert_eq!(result.error.as_deref(), Some("Song input cannot be empty"));
        }
    }

    #[tokio::test]
    async fn stub_resolver_delegates_to_select_song() {
        let result = StubSongResolver.resolve(" Yesterday ").await.unwrap();
        assert_eq!(result, SongSelectionResult::selected("Yesterday"));
    }

    #[test]
    fn lookup_error_message() {
        let result = SongSelectionResult::failed(SongError::Lookup("catalog offline".into()));
        assert_eq!(result.error.as_deref(), Some("Song lookup failed: catalog offline"));
    }
}
