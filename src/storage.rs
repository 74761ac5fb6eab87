use crate::errors::ControllerError;
use crate::models::SelectedFile;
use std::path::Path;
use tokio::fs;

/// Reads a video from disk as the upload selection.
pub async fn load_selection(path: &Path) -> Result<SelectedFile, ControllerError> {
    let bytes = fs::read(path).await.map_err(|source| ControllerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "video".to_string());
    Ok(SelectedFile { name, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_file_name_and_bytes() {
        let mut path = std::env::temp_dir();
        path.push(format!("footfall_selection_{}.mp4", std::process::id()));
        fs::write(&path, b"fake video").await.unwrap();

        let file = load_selection(&path).await.unwrap();
        assert_eq!(file.bytes, b"fake video");
        assert!(file.name.ends_with(".mp4"));

        fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let err = load_selection(Path::new("/definitely/not/here.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, ControllerError::Read { .. }));
    }
}
