use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::banner::{BannerService, SeaOrmBannerRepository};
use service::blog::{BlogService, SeaOrmBlogRepository};
use service::catalog::{SeaOrmServiceRepository, ServiceCatalog};
use storage::{ObjectStorage, S3ObjectStorage};

use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()?;

    // DB connection and schema
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;

    // Remote object storage handle, shared by every mutation service
    let object_storage: Arc<dyn ObjectStorage> = Arc::new(
        S3ObjectStorage::new(
            cfg.storage.access_key_id.clone(),
            cfg.storage.secret_access_key.clone(),
            cfg.storage.endpoint.clone(),
            cfg.storage.region.clone(),
            cfg.storage.bucket.clone(),
            cfg.storage.base_url.clone(),
        )
        .await,
    );

    let state = ServerState {
        banners: Arc::new(BannerService::new(
            Arc::new(SeaOrmBannerRepository { db: db.clone() }),
            object_storage.clone(),
        )),
        services: Arc::new(ServiceCatalog::new(
            Arc::new(SeaOrmServiceRepository { db: db.clone() }),
            object_storage.clone(),
        )),
        blogs: Arc::new(BlogService::new(
            Arc::new(SeaOrmBlogRepository { db: db.clone() }),
            object_storage,
        )),
    };

    // Build router
    let app: Router = routes::build_router(state, build_cors(), cfg.server.max_upload_bytes);

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting cms server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
