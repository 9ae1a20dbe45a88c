//! In-memory repositories mirroring the store-level semantics (newest-first
//! listings, unconditional deletes, atomic toggle). Used by service and
//! route tests that must run without a database.

use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::banner::repository::BannerRepository;
use crate::blog::repository::BlogRepository;
use crate::catalog::repository::ServiceRepository;
use crate::errors::ServiceError;

fn next(counter: &AtomicI32) -> i32 {
    counter.fetch_add(1, Ordering::SeqCst)
}

#[derive(Default)]
pub struct MemoryBannerRepository {
    rows: Mutex<Vec<models::banner::Model>>,
    next_id: AtomicI32,
    writes_attempted: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryBannerRepository {
    pub fn new() -> Self {
        Self { next_id: AtomicI32::new(1), ..Default::default() }
    }

    /// All subsequent writes fail (or succeed again) until changed.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn writes_attempted(&self) -> usize {
        self.writes_attempted.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<models::banner::Model> {
        self.rows.lock().unwrap().clone()
    }

    fn begin_write(&self) -> Result<(), ServiceError> {
        self.writes_attempted.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ServiceError::Db("memory repository is failing".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl BannerRepository for MemoryBannerRepository {
    async fn create(&self, image_url: &str, is_active: bool) -> Result<models::banner::Model, ServiceError> {
        self.begin_write()?;
        let row = models::banner::Model {
            id: next(&self.next_id),
            image_url: image_url.to_string(),
            is_active,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, image_url: &str, is_active: bool) -> Result<Option<models::banner::Model>, ServiceError> {
        self.begin_write()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|b| b.id == id) {
            Some(row) => {
                row.image_url = image_url.to_string();
                row.is_active = is_active;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<models::banner::Model>, ServiceError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<models::banner::Model>, ServiceError> {
        Ok(self.rows.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.begin_write()?;
        self.rows.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryServiceRepository {
    rows: Mutex<Vec<models::service::Model>>,
    next_id: AtomicI32,
    writes_attempted: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryServiceRepository {
    pub fn new() -> Self {
        Self { next_id: AtomicI32::new(1), ..Default::default() }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn writes_attempted(&self) -> usize {
        self.writes_attempted.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<models::service::Model> {
        self.rows.lock().unwrap().clone()
    }

    fn begin_write(&self) -> Result<(), ServiceError> {
        self.writes_attempted.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ServiceError::Db("memory repository is failing".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ServiceRepository for MemoryServiceRepository {
    async fn create(&self, title: &str, description: &str, image_url: &str, points: Vec<String>) -> Result<models::service::Model, ServiceError> {
        self.begin_write()?;
        let row = models::service::Model {
            id: next(&self.next_id),
            title: title.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            points,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<models::service::Model>, ServiceError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.begin_write()?;
        self.rows.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryBlogRepository {
    rows: Mutex<Vec<models::blog::Model>>,
    next_id: AtomicI32,
    writes_attempted: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryBlogRepository {
    pub fn new() -> Self {
        Self { next_id: AtomicI32::new(1), ..Default::default() }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn writes_attempted(&self) -> usize {
        self.writes_attempted.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<models::blog::Model> {
        self.rows.lock().unwrap().clone()
    }

    fn begin_write(&self) -> Result<(), ServiceError> {
        self.writes_attempted.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ServiceError::Db("memory repository is failing".into()));
        }
        Ok(())
    }

    fn sorted_desc(mut rows: Vec<models::blog::Model>) -> Vec<models::blog::Model> {
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows
    }
}

#[async_trait]
impl BlogRepository for MemoryBlogRepository {
    async fn create(&self, title: &str, description: &str, slug: &str, image_url: &str) -> Result<models::blog::Model, ServiceError> {
        self.begin_write()?;
        let row = models::blog::Model {
            id: next(&self.next_id),
            title: title.to_string(),
            description: description.to_string(),
            slug: slug.to_string(),
            image_url: image_url.to_string(),
            is_active: true,
            created_at: Utc::now().into(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<models::blog::Model>, ServiceError> {
        Ok(Self::sorted_desc(self.rows.lock().unwrap().clone()))
    }

    async fn list_active(&self) -> Result<Vec<models::blog::Model>, ServiceError> {
        let rows = self.rows.lock().unwrap().clone();
        Ok(Self::sorted_desc(rows.into_iter().filter(|b| b.is_active).collect()))
    }

    async fn toggle(&self, id: i32) -> Result<Option<models::blog::Model>, ServiceError> {
        self.begin_write()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|b| b.id == id) {
            Some(row) => {
                row.is_active = !row.is_active;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.begin_write()?;
        self.rows.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }
}
