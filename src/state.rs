use crate::models::SelectedFile;
use crate::view::{PlaybackError, View};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementState {
    pub source: Option<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    pub source: Option<String>,
    pub visible: bool,
    pub reloads: u32,
    pub playing: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailsState {
    pub html: String,
    pub visible: bool,
}

/// Everything a page would show, captured as plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub chart: ElementState,
    pub details: DetailsState,
    pub player: PlayerState,
    pub notices: Vec<String>,
    pub navigations: Vec<String>,
}

/// In-memory [`View`] that records every change.
#[derive(Clone, Default)]
pub struct RecordedView {
    state: Arc<Mutex<ViewState>>,
    selection: Arc<Mutex<Option<SelectedFile>>>,
    autoplay_blocked: bool,
}

impl RecordedView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(self, file: SelectedFile) -> Self {
        self.select(Some(file));
        self
    }

    /// Makes every `play` call fail, like a browser without a user gesture.
    pub fn with_autoplay_blocked(mut self) -> Self {
        self.autoplay_blocked = true;
        self
    }

    pub fn select(&self, file: Option<SelectedFile>) {
        *self.selection.lock().unwrap_or_else(PoisonError::into_inner) = file;
    }

    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl View for RecordedView {
    fn set_chart_source(&self, src: &str) {
        self.lock().chart.source = Some(src.to_string());
    }

    fn set_chart_visible(&self, visible: bool) {
        self.lock().chart.visible = visible;
    }

    fn set_details(&self, html: &str) {
        self.lock().details.html = html.to_string();
    }

    fn set_details_visible(&self, visible: bool) {
        self.lock().details.visible = visible;
    }

    fn notify(&self, message: &str) {
        self.lock().notices.push(message.to_string());
    }

    fn navigate(&self, location: &str) {
        self.lock().navigations.push(location.to_string());
    }

    fn selected_file(&self) -> Option<SelectedFile> {
        self.selection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_player_source(&self, src: &str) {
        let mut state = self.lock();
        state.player.source = Some(src.to_string());
        state.player.playing = false;
    }

    fn set_player_visible(&self, visible: bool) {
        self.lock().player.visible = visible;
    }

    fn reload_player(&self) {
        self.lock().player.reloads += 1;
    }

    fn play(&self) -> Result<(), PlaybackError> {
        if self.autoplay_blocked {
            return Err(PlaybackError("autoplay is not allowed".to_string()));
        }
        self.lock().player.playing = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let view = RecordedView::new();
        let other = view.clone();
        other.set_chart_source("/footfall_chart/2024/1/2.png");
        other.notify("hello");
        let state = view.snapshot();
        assert_eq!(state.chart.source.as_deref(), Some("/footfall_chart/2024/1/2.png"));
        assert_eq!(state.notices, vec!["hello".to_string()]);
    }

    #[test]
    fn blocked_autoplay_leaves_player_paused() {
        let view = RecordedView::new().with_autoplay_blocked();
        view.set_player_source("/x.mp4");
        assert!(view.play().is_err());
        assert!(!view.snapshot().player.playing);
    }
}
