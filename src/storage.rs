use chrono::Utc;
use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

/// URL prefix under which stored images are served.
pub const UPLOADS_PREFIX: &str = "/uploads";

/// A file received under the `image` form field.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub original_filename: String,
    pub bytes: Vec<u8>,
}

/// An image written to the upload directory.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub filename: String,
    pub url: String,
}

/// Local directory holding uploaded images, plus the base URL they are published under.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: Arc<PathBuf>,
    backend_url: Arc<str>,
}

impl UploadStore {
    /// Create the upload directory if it is missing.
    pub async fn init(dir: impl Into<PathBuf>, backend_url: &str) -> io::Result<Self> {
        let dir = dir.into();
        match tokio::fs::metadata(&dir).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(io::Error::other(format!(
                    "upload path is not a directory: {}",
                    dir.display()
                )));
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tokio::fs::create_dir_all(&dir).await?;
                tracing::info!(dir = %dir.display(), "created upload directory");
            }
            Err(err) => return Err(err),
        }

        Ok(Self {
            dir: Arc::new(dir),
            backend_url: Arc::from(backend_url.trim_end_matches('/')),
        })
    }

    pub fn dir(&self) -> &Path {
        self.dir.as_path()
    }

    pub fn public_url(&self, filename: &str) -> String {
        format!("{}{}/{}", self.backend_url, UPLOADS_PREFIX, filename)
    }

    /// Write the bytes under a timestamp-derived name. Two uploads landing in
    /// the same millisecond with the same extension overwrite each other.
    pub async fn save(&self, upload: &ImageUpload) -> io::Result<StoredImage> {
        let filename =
            timestamped_filename(&upload.original_filename, Utc::now().timestamp_millis());
        let target = self.dir.join(&filename);
        tokio::fs::write(&target, &upload.bytes).await?;
        tracing::debug!(file = %filename, size = upload.bytes.len(), "stored upload");

        Ok(StoredImage {
            url: self.public_url(&filename),
            filename,
        })
    }
}

/// `<millis><.ext>`, keeping the original extension if there is one.
pub fn timestamped_filename(original_filename: &str, millis: i64) -> String {
    match Path::new(original_filename)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) if !ext.is_empty() => format!("{millis}.{ext}"),
        _ => millis.to_string(),
    }
}
