use crate::db::connect;
use crate::{banner, blog, service};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Connect and migrate, or skip the test when no database is reachable.
async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

#[tokio::test]
async fn test_banner_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let created = banner::insert(&db, "https://cdn.example.com/banners/a.png", true).await?;
    assert_eq!(created.image_url, "https://cdn.example.com/banners/a.png");
    assert!(created.is_active);

    let found = banner::find_by_id(&db, created.id).await?;
    assert_eq!(found.as_ref().map(|b| b.id), Some(created.id));

    // Update replaces both fields and returns the new row
    let updated = banner::update(&db, created.id, "https://cdn.example.com/banners/b.png", false).await?;
    let updated = updated.expect("row exists");
    assert_eq!(updated.image_url, "https://cdn.example.com/banners/b.png");
    assert!(!updated.is_active);

    // Updating an id that never existed is a no-op
    let missing = banner::update(&db, i32::MAX, "https://cdn.example.com/x.png", true).await?;
    assert!(missing.is_none());

    banner::delete_by_id(&db, created.id).await?;
    assert!(banner::find_by_id(&db, created.id).await?.is_none());

    // Deleting again must not error
    banner::delete_by_id(&db, created.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_banner_list_is_newest_first() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let first = banner::insert(&db, "https://cdn.example.com/banners/1.png", true).await?;
    let second = banner::insert(&db, "https://cdn.example.com/banners/2.png", true).await?;

    let all = banner::list(&db).await?;
    let pos_first = all.iter().position(|b| b.id == first.id).expect("first listed");
    let pos_second = all.iter().position(|b| b.id == second.id).expect("second listed");
    assert!(pos_second < pos_first, "higher ids sort before lower ids");
    for pair in all.windows(2) {
        assert!(pair[0].id > pair[1].id);
    }

    banner::delete_by_id(&db, first.id).await?;
    banner::delete_by_id(&db, second.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_service_points_roundtrip() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let points = vec!["design".to_string(), "build".to_string(), "ship".to_string()];
    let created = service::insert(
        &db,
        "Web development",
        "Full-stack delivery",
        "https://cdn.example.com/services/web.png",
        points.clone(),
    )
    .await?;
    assert_eq!(created.points, points, "order is preserved");

    let listed = service::list(&db).await?;
    let row = listed.iter().find(|s| s.id == created.id).expect("listed");
    assert_eq!(row.points, points);

    service::delete_by_id(&db, created.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_blog_toggle_is_an_involution() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let created = blog::insert(
        &db,
        "Launch notes",
        "What shipped this quarter",
        "launch-notes",
        "https://cdn.example.com/blogs/launch.png",
    )
    .await?;
    assert!(created.is_active, "blogs start active");

    let once = blog::toggle_active(&db, created.id).await?.expect("row exists");
    assert!(!once.is_active);
    let twice = blog::toggle_active(&db, created.id).await?.expect("row exists");
    assert_eq!(twice.is_active, created.is_active);

    // Unknown id toggles nothing
    assert!(blog::toggle_active(&db, i32::MAX).await?.is_none());

    blog::delete_by_id(&db, created.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_blog_listings_filter_and_sort() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let visible = blog::insert(&db, "Visible", "published", "visible", "https://cdn.example.com/blogs/v.png").await?;
    let hidden = blog::insert(&db, "Hidden", "unpublished", "hidden", "https://cdn.example.com/blogs/h.png").await?;
    blog::toggle_active(&db, hidden.id).await?;

    let active = blog::list_active(&db).await?;
    assert!(active.iter().any(|b| b.id == visible.id));
    assert!(!active.iter().any(|b| b.id == hidden.id));

    let all = blog::list_all(&db).await?;
    assert!(all.iter().any(|b| b.id == hidden.id));
    for pair in all.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at, "newest first");
    }

    blog::delete_by_id(&db, visible.id).await?;
    blog::delete_by_id(&db, hidden.id).await?;
    Ok(())
}
