use std::path::{Path, PathBuf};
use std::process::Command;

use tokio::fs as async_fs;

use crate::error::{ReceiptError, Result};
use crate::render::RenderedReceipt;
use crate::types::SessionId;

/// Write the receipt into `receipts_dir`, creating it if needed
///
/// An existing receipt for the same session is overwritten.
pub async fn write_receipt(
    receipts_dir: &Path,
    session_id: &SessionId,
    receipt: &RenderedReceipt,
) -> Result<PathBuf> {
    async_fs::create_dir_all(receipts_dir)
        .await
        .map_err(|source| ReceiptError::DirectoryCreate {
            path: receipts_dir.to_path_buf(),
            source,
        })?;

    let output_path = receipts_dir.join(session_id.receipt_file_name());
    async_fs::write(&output_path, receipt)
        .await
        .map_err(|source| ReceiptError::FileWrite {
            path: output_path.clone(),
            source,
        })?;

    Ok(output_path)
}

/// Opens a written receipt for the user to look at
#[cfg_attr(test, mockall::automock)]
pub trait Viewer {
    fn open(&self, path: &Path) -> std::io::Result<()>;
}

/// Hands the file to the platform's `open` command
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl Viewer for SystemViewer {
    fn open(&self, path: &Path) -> std::io::Result<()> {
        Command::new("open").arg(path).spawn().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_dirs() {
        let dir = TempDir::new().unwrap();
        let receipts_dir = dir.path().join("a").join("b").join("receipts");
        let receipt = RenderedReceipt::from("<svg/>".to_string());

        let path = write_receipt(&receipts_dir, &SessionId::from("s-1"), &receipt)
            .await
            .unwrap();

        assert_eq!(path, receipts_dir.join("s-1.svg"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[tokio::test]
    async fn test_rewrite_overwrites() {
        let dir = TempDir::new().unwrap();
        let id = SessionId::from("s-1");

        write_receipt(dir.path(), &id, &RenderedReceipt::from("first".to_string()))
            .await
            .unwrap();
        let path = write_receipt(dir.path(), &id, &RenderedReceipt::from("second".to_string()))
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_write_into_file_path_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a dir").unwrap();

        let result = write_receipt(
            &blocker.join("receipts"),
            &SessionId::from("s-1"),
            &RenderedReceipt::from(String::new()),
        )
        .await;
        assert!(matches!(result, Err(ReceiptError::DirectoryCreate { .. })));
    }
}
