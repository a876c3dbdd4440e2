use crate::ygoprodeck::{Card, CardSource};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Result of the single catalog fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Full catalog, in upstream order
    Loaded(Vec<Card>),
    /// Display text of whatever went wrong
    Failed(String),
}

/// How a load run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch applied and the pacing delay elapsed; the loading flag may clear
    Settled,
    /// The owning view went away; nothing further may be applied
    Cancelled,
}

/// Runs the one-shot catalog fetch followed by the loading pacing delay.
///
/// Both steps race against `cancel`, so a view torn down mid-flight never
/// receives a late result or a late "loading finished".
pub struct CatalogLoader {
    source: Arc<dyn CardSource>,
    pacing: Duration,
    cancel: CancellationToken,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CardSource>, pacing: Duration, cancel: CancellationToken) -> Self {
        Self {
            source,
            pacing,
            cancel,
        }
    }

    /// Fetch once, hand the outcome to `apply`, then hold for the pacing delay.
    ///
    /// `apply` runs at most once and never after cancellation.
    pub async fn run<F>(&self, apply: F) -> LoadStatus
    where
        F: FnOnce(LoadOutcome),
    {
        let outcome = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                debug!("Catalog fetch cancelled before completion");
                return LoadStatus::Cancelled;
            }
            result = self.source.fetch_cards() => match result {
                Ok(cards) => {
                    info!("Catalog loaded with {} cards", cards.len());
                    LoadOutcome::Loaded(cards)
                }
                Err(e) => {
                    warn!("Catalog fetch failed: {}", e);
                    LoadOutcome::Failed(e.to_string())
                }
            },
        };

        apply(outcome);

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                debug!("Loading delay cancelled");
                LoadStatus::Cancelled
            }
            _ = tokio::time::sleep(self.pacing) => LoadStatus::Settled,
        }
    }
}
