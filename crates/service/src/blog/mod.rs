pub mod repository;
pub mod service;

pub use repository::{BlogRepository, SeaOrmBlogRepository};
pub use service::BlogService;
