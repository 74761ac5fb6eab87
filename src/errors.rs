use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// How a failure is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input or an incomplete response; shown with a descriptive message.
    Validation,
    /// Network failure or non-success status; logged and shown generically.
    Transport,
    /// The backend answered with an error payload.
    Data,
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("no video file selected")]
    NoFileSelected,

    #[error("response is missing `{0}`")]
    MissingField(&'static str),

    #[error("invalid date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid calendar position: {0}")]
    InvalidPosition(String),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("server responded with status {}", .0.as_u16())]
    Status(StatusCode),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Data(String),

    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ControllerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoFileSelected
            | Self::MissingField(_)
            | Self::InvalidDate { .. }
            | Self::InvalidPosition(_)
            | Self::InvalidBaseUrl { .. }
            | Self::Read { .. } => ErrorKind::Validation,
            Self::Status(_) | Self::Http(_) | Self::Decode { .. } => ErrorKind::Transport,
            Self::Data(_) => ErrorKind::Data,
        }
    }

    /// Text shown in a blocking notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::NoFileSelected => "Please choose a video to upload first".to_string(),
            Self::MissingField(field) => format!("The server did not return {field}"),
            Self::Status(status) => format!("Upload failed: {}", status.as_u16()),
            Self::Http(_) | Self::Decode { .. } => {
                "Something went wrong, check the log for details".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_notice_references_code() {
        let err = ControllerError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.user_message().contains("500"));
    }

    #[test]
    fn data_errors_show_backend_message() {
        let err = ControllerError::Data("no data".into());
        assert_eq!(err.kind(), ErrorKind::Data);
        assert_eq!(err.user_message(), "no data");
    }

    #[test]
    fn missing_field_is_validation() {
        let err = ControllerError::MissingField("download_url");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.user_message().contains("download_url"));
    }
}
