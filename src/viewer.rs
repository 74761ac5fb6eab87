use crate::app::chart_path;
use crate::client::FootfallClient;
use crate::errors::ControllerError;
use crate::models::{FootfallQuery, FootfallResult};
use crate::ui::{render_error, render_summary};
use crate::view::View;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Shows the details panel when dropped.
struct RevealDetails<'a> {
    view: &'a dyn View,
}

impl Drop for RevealDetails<'_> {
    fn drop(&mut self) {
        self.view.set_details_visible(true);
    }
}

pub struct FootfallViewer {
    client: Arc<FootfallClient>,
    view: Arc<dyn View>,
    generation: AtomicU64,
}

impl FootfallViewer {
    pub fn new(client: Arc<FootfallClient>, view: Arc<dyn View>) -> Self {
        Self {
            client,
            view,
            generation: AtomicU64::new(0),
        }
    }

    /// Shows the chart for `query` straight away, then fills the details
    /// panel from the summary endpoint.
    ///
    /// The chart is hidden again if the backend reports an error or the
    /// request fails. Returns `Ok(None)` when a later call was issued before
    /// this response arrived; the view is left to that call.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error after it has been rendered.
    pub async fn show_footfall(
        &self,
        query: FootfallQuery,
    ) -> Result<Option<FootfallResult>, ControllerError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.view.set_chart_source(&chart_path(&query));
        self.view.set_chart_visible(true);

        let outcome = self.client.fetch_summary(&query).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(%query, "discarding superseded footfall response");
            return Ok(None);
        }

        // Armed only once a response is in hand, so a dropped call never
        // reveals stale details.
        let _reveal = RevealDetails { view: &*self.view };

        match outcome {
            Ok(FootfallResult::Success(summary)) => {
                info!(%query, total = summary.total(), "footfall loaded");
                self.view.set_details(&render_summary(&query, &summary));
                Ok(Some(FootfallResult::Success(summary)))
            }
            Ok(FootfallResult::Error(message)) => {
                warn!(%query, %message, "backend reported no footfall");
                self.view.set_details(&render_error(&query, &message));
                self.view.set_chart_visible(false);
                Ok(Some(FootfallResult::Error(message)))
            }
            Err(err) => {
                error!(%query, error = %err, "error fetching footfall data");
                self.view.set_details(&render_error(&query, &err.user_message()));
                self.view.set_chart_visible(false);
                Err(err)
            }
        }
    }
}
