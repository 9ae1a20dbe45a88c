use crate::{ObjectStorage, StorageError, UploadedImage};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the remote store. Counts upload attempts and can be
/// switched into a failing mode to exercise the upload-failed path.
#[derive(Clone)]
pub struct MockObjectStorage {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    base_url: String,
    uploads_attempted: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl MockObjectStorage {
    pub fn new() -> Self {
        Self {
            objects: Arc::new(Mutex::new(HashMap::new())),
            base_url: "https://mock-cdn.example.com".to_string(),
            uploads_attempted: Arc::new(AtomicUsize::new(0)),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// All subsequent uploads fail (or succeed again) until changed.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn upload_count(&self) -> usize {
        self.uploads_attempted.load(Ordering::SeqCst)
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }
}

impl Default for MockObjectStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStorage for MockObjectStorage {
    async fn upload(&self, data: &[u8], folder: &str) -> Result<UploadedImage, StorageError> {
        self.uploads_attempted.fetch_add(1, Ordering::SeqCst);

        if data.is_empty() {
            return Err(StorageError::EmptyPayload);
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Upload("mock storage is failing".to_string()));
        }

        let serial = self.objects.lock().unwrap().len();
        let key = format!("{}/{}", folder, serial);
        self.objects.lock().unwrap().insert(key.clone(), data.to_vec());
        Ok(UploadedImage { url: format!("{}/{}", self.base_url, key), key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_returns_url_under_base() {
        let storage = MockObjectStorage::new();
        let uploaded = storage.upload(b"png bytes", "banners").await.unwrap();
        assert_eq!(uploaded.url, "https://mock-cdn.example.com/banners/0");
        assert_eq!(storage.upload_count(), 1);
        assert!(storage.contains_key(&uploaded.key));
    }

    #[tokio::test]
    async fn custom_base_url_is_used() {
        let storage = MockObjectStorage::new().with_base_url("https://cdn.test");
        let uploaded = storage.upload(b"data", "blogs").await.unwrap();
        assert!(uploaded.url.starts_with("https://cdn.test/blogs/"));
    }

    #[tokio::test]
    async fn empty_payload_is_rejected_without_storing() {
        let storage = MockObjectStorage::new();
        let err = storage.upload(b"", "banners").await.unwrap_err();
        assert!(matches!(err, StorageError::EmptyPayload));
        assert_eq!(storage.object_count(), 0);
        // The attempt is still counted
        assert_eq!(storage.upload_count(), 1);
    }

    #[tokio::test]
    async fn failing_mode_keeps_no_partial_state() {
        let storage = MockObjectStorage::new();
        storage.set_failing(true);
        let err = storage.upload(b"data", "services").await.unwrap_err();
        assert!(matches!(err, StorageError::Upload(_)));
        assert_eq!(storage.object_count(), 0);

        storage.set_failing(false);
        assert!(storage.upload(b"data", "services").await.is_ok());
    }
}
