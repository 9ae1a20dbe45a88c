use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct AddBannerForm {
    /// Binary image payload; the field name matches the stored column.
    pub image_url: String,
}

#[derive(ToSchema)]
pub struct UpdateBannerForm {
    pub image_file: Option<String>,
    pub is_active: String,
    pub image_url: Option<String>,
}

#[derive(ToSchema)]
pub struct AddServiceForm {
    pub image_file: String,
    pub title: String,
    pub description: String,
    pub points: Option<String>,
}

#[derive(ToSchema)]
pub struct CreateBlogForm {
    pub image: String,
    pub title: String,
    pub description: String,
    pub slug: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::banners::add,
        crate::routes::banners::update,
        crate::routes::banners::list,
        crate::routes::banners::get,
        crate::routes::banners::remove,
        crate::routes::services::add,
        crate::routes::services::list,
        crate::routes::services::remove,
        crate::routes::blogs::list_active,
        crate::routes::blogs::list_all,
        crate::routes::blogs::create,
        crate::routes::blogs::toggle,
        crate::routes::blogs::remove,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            AddBannerForm,
            UpdateBannerForm,
            AddServiceForm,
            CreateBlogForm,
        )
    ),
    tags(
        (name = "health"),
        (name = "banners"),
        (name = "services"),
        (name = "blogs"),
    )
)]
pub struct ApiDoc;
