use camino::{Utf8Path, Utf8PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CardFileError {
    #[error("failed to read card list {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
}

/// Reads a card list file in full. Non-UTF-8 content is reported as an I/O error.
pub async fn read_card_file(path: &Utf8Path) -> Result<String, CardFileError> {
    tokio::fs::read_to_string(path.as_std_path())
        .await
        .map_err(|source| CardFileError::Io {
            path: path.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_whole_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("pool.txt")).unwrap();
        std::fs::write(&path, "4x Shock\r\n2x Opt\n").unwrap();

        let text = read_card_file(&path).await.unwrap();
        assert_eq!(text, "4x Shock\r\n2x Opt\n");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("missing.txt")).unwrap();

        let err = read_card_file(&path).await.unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[tokio::test]
    async fn binary_content_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("pool.txt")).unwrap();
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        assert!(read_card_file(&path).await.is_err());
    }
}
