use crate::client::FootfallClient;
use crate::models::{CalendarPosition, FootfallQuery};
use crate::navigator::DateNavigator;
use crate::upload::VideoUploadController;
use crate::view::View;
use crate::viewer::FootfallViewer;
use std::sync::Arc;

pub const UPLOAD_PATH: &str = "/api/upload_video";

pub fn navigate_path(position: CalendarPosition) -> String {
    format!("/?year={}&month={}", position.year, position.month)
}

pub fn chart_path(query: &FootfallQuery) -> String {
    format!(
        "/footfall_chart/{}/{}/{}.png",
        query.year(),
        query.month(),
        query.day()
    )
}

pub fn summary_path(query: &FootfallQuery) -> String {
    format!(
        "/api/footfall/{}/{}/{}",
        query.year(),
        query.month(),
        query.day()
    )
}

/// The three page controllers bound to one backend and one view.
pub struct Dashboard {
    pub navigator: DateNavigator,
    pub viewer: FootfallViewer,
    pub uploader: VideoUploadController,
}

impl Dashboard {
    pub fn new(client: FootfallClient, view: Arc<dyn View>) -> Self {
        let client = Arc::new(client);
        Self {
            navigator: DateNavigator::new(Arc::clone(&view)),
            viewer: FootfallViewer::new(Arc::clone(&client), Arc::clone(&view)),
            uploader: VideoUploadController::new(client, view),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_keyed_by_date() {
        let query = FootfallQuery::new(2025, 6, 9).unwrap();
        assert_eq!(chart_path(&query), "/footfall_chart/2025/6/9.png");
        assert_eq!(summary_path(&query), "/api/footfall/2025/6/9");
        assert_eq!(
            navigate_path(CalendarPosition { year: 2023, month: 12 }),
            "/?year=2023&month=12"
        );
    }
}
