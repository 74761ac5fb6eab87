//! The page surface the controllers drive.
//!
//! Each method is one primitive a dashboard page offers: the footfall chart
//! image, the details panel, blocking notices, page navigation, the file
//! picker and the video player. Controllers never read back what they wrote,
//! so implementations are free to forward straight to a real page.

use crate::models::SelectedFile;
use thiserror::Error;

/// The player refused to start, e.g. because of an autoplay policy.
#[derive(Debug, Error)]
#[error("playback refused: {0}")]
pub struct PlaybackError(pub String);

pub trait View: Send + Sync {
    fn set_chart_source(&self, src: &str);
    fn set_chart_visible(&self, visible: bool);

    fn set_details(&self, html: &str);
    fn set_details_visible(&self, visible: bool);

    /// Blocking notice shown to the user.
    fn notify(&self, message: &str);

    /// Replaces the current page with `location`. Nothing is awaited.
    fn navigate(&self, location: &str);

    fn selected_file(&self) -> Option<SelectedFile>;

    fn set_player_source(&self, src: &str);
    fn set_player_visible(&self, visible: bool);
    fn reload_player(&self);
    fn play(&self) -> Result<(), PlaybackError>;
}
