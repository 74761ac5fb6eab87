pub mod app;
pub mod client;
pub mod errors;
pub mod models;
pub mod navigator;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod upload;
pub mod view;
pub mod viewer;

pub use app::Dashboard;
pub use client::FootfallClient;
pub use errors::{ControllerError, ErrorKind};
pub use models::{CalendarPosition, FootfallQuery, FootfallResult, SelectedFile, UploadReceipt};
pub use navigator::compute_target;
pub use state::{RecordedView, ViewState};
pub use storage::load_selection;
pub use view::View;
