use crate::client::FootfallClient;
use crate::errors::{ControllerError, ErrorKind};
use crate::models::{UploadOutcome, UploadReceipt};
use crate::view::View;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct VideoUploadController {
    client: Arc<FootfallClient>,
    view: Arc<dyn View>,
}

impl VideoUploadController {
    pub fn new(client: Arc<FootfallClient>, view: Arc<dyn View>) -> Self {
        Self { client, view }
    }

    /// Uploads the selected file and plays the processed result.
    ///
    /// Every failure is logged and shown to the user before it is returned;
    /// the player is only touched on success. Nothing is kept between calls,
    /// so a failed upload can simply be retried.
    pub async fn upload(&self) -> UploadOutcome {
        match self.try_upload().await {
            Ok(receipt) => Ok(receipt),
            Err(err) => {
                match err.kind() {
                    ErrorKind::Transport => error!(error = %err, "video upload failed"),
                    ErrorKind::Validation | ErrorKind::Data => {
                        warn!(error = %err, "video upload rejected");
                    }
                }
                self.view.notify(&err.user_message());
                Err(err)
            }
        }
    }

    async fn try_upload(&self) -> Result<UploadReceipt, ControllerError> {
        let file = self
            .view
            .selected_file()
            .ok_or(ControllerError::NoFileSelected)?;

        info!(name = %file.name, bytes = file.bytes.len(), "uploading video");
        let receipt = self.client.upload_video(file).await?;

        self.view.set_player_source(&receipt.download_url);
        self.view.set_player_visible(true);
        self.view.reload_player();
        if let Err(err) = self.view.play() {
            debug!(error = %err, "autoplay refused");
        }

        info!(download_url = %receipt.download_url, "processed video ready");
        Ok(receipt)
    }
}
