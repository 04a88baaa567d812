//! Song confirmation flow

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use futures::FutureExt;
use tokio::sync::Mutex;

use crate::model::{AppModel, SongSelectionResult};
use super::AppController;

/// Clears the loading flag if a confirmation ends without reaching its cleanup,
/// e.g. when the task running it is aborted.
struct LoadingGuard {
    model: Option<Arc<Mutex<AppModel>>>,
}

impl LoadingGuard {
    fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self { model: Some(model) }
    }

    fn disarm(&mut self) {
        self.model = None;
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let Some(model) = self.model.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    model.lock().await.finish_song_confirmation().await;
                });
            }
            Err(_) => tracing::warn!("No runtime to clear song loading state"),
        }
    }
}

impl AppController {
    /// Confirm the current song query: Idle -> Loading -> Idle.
    ///
    /// Returns `None` when nothing was attempted (blank query, or another
    /// confirmation still in flight). Failures are logged and shown in the
    /// error overlay; the query is kept so the user can fix it.
    pub async fn confirm_song(&self) -> Option<SongSelectionResult> {
        let query = {
            let model = self.model.lock().await;
            model.begin_song_confirmation().await?
        };

        let mut guard = LoadingGuard::new(self.model.clone());

        tracing::debug!(query = %query, "Confirming song");
        let outcome = match AssertUnwindSafe(self.resolver.resolve(&query)).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(_) => Err(anyhow::anyhow!("song resolver panicked")),
        };

        let model = self.model.lock().await;
        let result = match outcome {
            Ok(result) => {
                match (result.success, result.song_name.clone()) {
                    (true, Some(song_name)) => {
                        let songs = model.apply_song_selection(song_name.clone()).await;
                        tracing::info!(song = %song_name, total = songs.len(), "Song selected");
                        tracing::debug!(songs = ?songs, "Selected songs changed");
                    }
                    _ => {
                        let message = result.error.clone().unwrap_or_else(|| "Unknown error occurred".to_string());
                        tracing::error!(query = %query, error = %message, "Song selection failed");
                        model.set_error(message).await;
                    }
                }
                Some(result)
            }
            Err(e) => {
                tracing::error!(query = %query, error = %e, "Error selecting song");
                model.set_error(Self::format_error(&e)).await;
                None
            }
        };
        model.finish_song_confirmation().await;
        guard.disarm();
        result
    }

    /// Run `confirm_song` in the background so the UI keeps drawing while loading.
    pub async fn submit_song(&self) {
        if self.model.lock().await.is_song_loading().await {
            tracing::debug!("Song confirmation already in flight, ignoring submit");
            return;
        }
        let controller = self.clone();
        tokio::spawn(async move {
            controller.confirm_song().await;
        });
    }
}
