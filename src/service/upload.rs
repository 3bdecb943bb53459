use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::{multipart::Field, Multipart};
use chrono::Utc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::UploadError;

// Text fields are buffered in memory, so they get a much tighter cap than
// file parts, which stream to disk.
const MAX_TEXT_FIELD_BYTES: usize = 1024 * 1024;

static UPLOAD_SEQ: AtomicU64 = AtomicU64::new(0);

/// Everything a multipart form submitted, with file parts already written
/// to disk and replaced by their stored paths.
#[derive(Debug, Default)]
pub struct ReceivedForm {
    pub fields: HashMap<String, Vec<String>>,
    pub files: HashMap<String, String>,
}

impl ReceivedForm {
    pub fn text(&self, name: &str) -> String {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .cloned()
            .unwrap_or_default()
    }

    pub fn texts(&self, name: &str) -> &[String] {
        self.fields
            .get(name)
            .map(|values| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(|path| path.as_str())
    }

    // A create form sends a file for a slot, an edit form echoes the stored
    // path back as a plain text input. A fresh upload wins over the echo.
    pub fn file_or_text(&self, name: &str) -> String {
        match self.file(name) {
            Some(path) => path.to_string(),
            None => self.text(name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadReceiver {
    upload_dir: PathBuf,
    max_file_bytes: usize,
}

impl UploadReceiver {
    pub fn new(upload_dir: impl Into<PathBuf>, max_file_bytes: usize) -> Self {
        UploadReceiver {
            upload_dir: upload_dir.into(),
            max_file_bytes,
        }
    }

    /// Drains a multipart request, writing every file part into the upload
    /// directory and collecting everything else as text fields.
    pub async fn receive(&self, mut multipart: Multipart) -> Result<ReceivedForm, UploadError> {
        let mut form = ReceivedForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| UploadError::Malformed(e.to_string()))?
        {
            let name = match field.name() {
                Some(name) => name.to_string(),
                None => continue,
            };

            match field.file_name().map(|file_name| file_name.to_string()) {
                Some(file_name) if !file_name.is_empty() => {
                    let stored = self.store_file(&file_name, field).await?;
                    form.files.insert(name, stored);
                }
                // A file input left empty still arrives as a part with an
                // empty filename. Nothing to keep.
                Some(_) => {}
                None => {
                    let text = read_text(field).await?;
                    form.fields.entry(name).or_default().push(text);
                }
            }
        }

        Ok(form)
    }

    async fn store_file(
        &self,
        original_name: &str,
        mut field: Field<'_>,
    ) -> Result<String, UploadError> {
        let stored_name = generate_file_name(original_name);
        let path = self.upload_dir.join(&stored_name);

        let mut file = fs::File::create(&path).await?;
        let mut written = 0usize;

        loop {
            let chunk = match field.chunk().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                Err(e) => {
                    drop(file);
                    let _ = fs::remove_file(&path).await;
                    return Err(UploadError::Malformed(e.to_string()));
                }
            };

            written += chunk.len();
            if written > self.max_file_bytes {
                drop(file);
                let _ = fs::remove_file(&path).await;
                return Err(UploadError::FileTooLarge(self.max_file_bytes));
            }

            file.write_all(&chunk).await?;
        }

        file.flush().await?;

        tracing::debug!("stored upload {} as {}", original_name, stored_name);

        Ok(path.to_string_lossy().into_owned())
    }
}

async fn read_text(mut field: Field<'_>) -> Result<String, UploadError> {
    let mut buf: Vec<u8> = Vec::new();

    loop {
        let chunk = match field.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) => return Err(UploadError::Malformed(e.to_string())),
        };

        if buf.len() + chunk.len() > MAX_TEXT_FIELD_BYTES {
            return Err(UploadError::TextFieldTooLarge(MAX_TEXT_FIELD_BYTES));
        }
        buf.extend_from_slice(&chunk);
    }

    String::from_utf8(buf).map_err(|e| UploadError::Malformed(e.to_string()))
}

// Receipt time in millis plus a process-wide sequence, keeping the original
// extension.
fn generate_file_name(original: &str) -> String {
    let ext = Path::new(original)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    let seq = UPLOAD_SEQ.fetch_add(1, Ordering::Relaxed);

    format!("{}-{}{}", Utc::now().timestamp_millis(), seq, ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{header::CONTENT_TYPE, Request};

    fn multipart_request(body: String) -> Request<Body> {
        Request::builder()
            .header(CONTENT_TYPE, "multipart/form-data; boundary=XBOUNDARY")
            .body(Body::from(body))
            .unwrap()
    }

    fn temp_upload_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("estateboard-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn generated_names_keep_the_extension() {
        let name = generate_file_name("plan.pdf");
        assert!(name.ends_with(".pdf"));

        let bare = generate_file_name("README");
        assert!(!bare.contains('.'));
    }

    #[test]
    fn generated_names_are_distinct() {
        let first = generate_file_name("front.png");
        let second = generate_file_name("front.png");
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn receive_collects_text_fields_and_stores_files() {
        let dir = temp_upload_dir();

        let body = [
            "--XBOUNDARY",
            "Content-Disposition: form-data; name=\"name\"",
            "",
            "Lake View Residency",
            "--XBOUNDARY",
            "Content-Disposition: form-data; name=\"categories\"",
            "",
            "Hero",
            "--XBOUNDARY",
            "Content-Disposition: form-data; name=\"categories\"",
            "",
            "Spotlight",
            "--XBOUNDARY",
            "Content-Disposition: form-data; name=\"imageUrl\"; filename=\"front.jpg\"",
            "Content-Type: image/jpeg",
            "",
            "jpegbytes",
            "--XBOUNDARY--",
            "",
        ]
        .join("\r\n");

        let multipart = Multipart::from_request(multipart_request(body), &())
            .await
            .unwrap();

        let receiver = UploadReceiver::new(&dir, 1024);
        let form = receiver.receive(multipart).await.unwrap();

        assert_eq!(form.text("name"), "Lake View Residency");
        assert_eq!(
            form.texts("categories").to_vec(),
            vec!["Hero".to_string(), "Spotlight".to_string()]
        );

        let stored = form.file("imageUrl").unwrap();
        assert!(stored.ends_with(".jpg"));
        assert_eq!(std::fs::read_to_string(stored).unwrap(), "jpegbytes");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn oversized_files_reject_the_whole_request() {
        let dir = temp_upload_dir();

        let body = [
            "--XBOUNDARY",
            "Content-Disposition: form-data; name=\"imageUrl\"; filename=\"front.jpg\"",
            "Content-Type: image/jpeg",
            "",
            "way past the cap",
            "--XBOUNDARY--",
            "",
        ]
        .join("\r\n");

        let multipart = Multipart::from_request(multipart_request(body), &())
            .await
            .unwrap();

        let receiver = UploadReceiver::new(&dir, 4);
        let result = receiver.receive(multipart).await;

        assert!(matches!(result, Err(UploadError::FileTooLarge(4))));

        // the partial file is cleaned up
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn empty_file_inputs_are_skipped() {
        let dir = temp_upload_dir();

        let body = [
            "--XBOUNDARY",
            "Content-Disposition: form-data; name=\"logo\"; filename=\"\"",
            "Content-Type: application/octet-stream",
            "",
            "",
            "--XBOUNDARY--",
            "",
        ]
        .join("\r\n");

        let multipart = Multipart::from_request(multipart_request(body), &())
            .await
            .unwrap();

        let receiver = UploadReceiver::new(&dir, 1024);
        let form = receiver.receive(multipart).await.unwrap();

        assert!(form.file("logo").is_none());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
