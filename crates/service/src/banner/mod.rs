pub mod repository;
pub mod service;

pub use repository::{BannerRepository, SeaOrmBannerRepository};
pub use service::BannerService;
