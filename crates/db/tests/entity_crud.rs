//! Integration tests for the repository layer against a real database:
//! - Create, update, list and delete content
//! - Publication and display-window filters
//! - Unique constraint and cascade behaviour
//! - Newsletter subscribe / unsubscribe lifecycle and concurrent signups
//! - Login failure counting and lock expiry

use assert_matches::assert_matches;
use serde_json::{json, Map};
use sqlx::PgPool;
use heptapus_db::models::announcement::CreateAnnouncement;
use heptapus_db::models::blog_post::{CreateBlogPost, UpdateBlogPost};
use heptapus_db::models::job_application::CreateJobApplication;
use heptapus_db::models::job_posting::CreateJobPosting;
use heptapus_db::models::project::{CreateProject, UpdateProject};
use heptapus_db::models::setting::UpsertSetting;
use heptapus_db::models::user::CreateUser;
use heptapus_db::repositories::subscriber_repo::SubscribeOutcome;
use heptapus_db::repositories::{
    AnnouncementRepo, BlogPostRepo, DashboardRepo, JobApplicationRepo, JobPostingRepo,
    ProjectRepo, SettingRepo, SubscriberRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str, published: bool) -> CreateProject {
    CreateProject {
        slug: None,
        title: title.to_string(),
        description: Some("Açıklama".to_string()),
        content: None,
        category: None,
        image_url: None,
        website_url: None,
        is_featured: None,
        is_published: Some(published),
        sort_order: None,
        translations: None,
        localized: Map::new(),
    }
}

fn new_post(title: &str, published: bool) -> CreateBlogPost {
    CreateBlogPost {
        slug: None,
        title: title.to_string(),
        excerpt: None,
        content: "İçerik".to_string(),
        cover_image_url: None,
        is_published: Some(published),
        translations: None,
        localized: Map::new(),
    }
}

fn new_announcement(title: &str) -> CreateAnnouncement {
    CreateAnnouncement {
        title: title.to_string(),
        content: None,
        link_url: None,
        priority: None,
        is_active: None,
        starts_at: None,
        ends_at: None,
        translations: None,
        localized: Map::new(),
    }
}

fn new_job(title: &str) -> CreateJobPosting {
    CreateJobPosting {
        slug: None,
        title: title.to_string(),
        department: Some("Mühendislik".to_string()),
        location: Some("İstanbul".to_string()),
        employment_type: None,
        description: "Rust geliştirici arıyoruz.".to_string(),
        requirements: None,
        is_active: None,
        closes_at: None,
        translations: None,
        localized: Map::new(),
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_crud(pool: PgPool) {
    let mut input = new_project("Akıllı Şehir", true);
    input.translations = Some(json!({"en": {"title": "Smart City"}}));
    let project = ProjectRepo::create(&pool, "akilli-sehir", &input).await.unwrap();
    assert_eq!(project.slug, "akilli-sehir");
    assert_eq!(project.translations["en"]["title"], "Smart City");

    let found = ProjectRepo::find_published_by_slug(&pool, "akilli-sehir")
        .await
        .unwrap()
        .expect("published project should be found");
    assert_eq!(found.id, project.id);

    let update = UpdateProject {
        slug: None,
        title: Some("Akıllı Şehir Platformu".to_string()),
        description: None,
        content: None,
        category: None,
        image_url: None,
        website_url: None,
        is_featured: Some(true),
        is_published: None,
        sort_order: None,
        translations: None,
        localized: Map::new(),
    };
    let updated = ProjectRepo::update(&pool, project.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Akıllı Şehir Platformu");
    assert!(updated.is_featured);
    // Untouched columns keep their values.
    assert_eq!(updated.description.as_deref(), Some("Açıklama"));
    assert_eq!(updated.translations["en"]["title"], "Smart City");

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());
    assert!(!ProjectRepo::delete(&pool, project.id).await.unwrap());
    assert!(ProjectRepo::find_by_id(&pool, project.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_drafts_hidden_from_public_lists(pool: PgPool) {
    ProjectRepo::create(&pool, "yayinda", &new_project("Yayında", true))
        .await
        .unwrap();
    ProjectRepo::create(&pool, "taslak", &new_project("Taslak", false))
        .await
        .unwrap();

    let public = ProjectRepo::list_published(&pool, false).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].slug, "yayinda");

    assert!(ProjectRepo::find_published_by_slug(&pool, "taslak")
        .await
        .unwrap()
        .is_none());

    let all = ProjectRepo::list(&pool, 50, 0).await.unwrap();
    assert_eq!(all.len(), 2);

    let featured = ProjectRepo::list_published(&pool, true).await.unwrap();
    assert!(featured.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_slug_fails(pool: PgPool) {
    ProjectRepo::create(&pool, "ayni", &new_project("Aynı", true))
        .await
        .unwrap();
    let err = ProjectRepo::create(&pool, "ayni", &new_project("Aynı 2", true))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err), "expected unique violation, got {err:?}");
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blog_publish_stamps_published_at_once(pool: PgPool) {
    let draft = BlogPostRepo::create(&pool, "ilk-yazi", None, &new_post("İlk Yazı", false))
        .await
        .unwrap();
    assert!(draft.published_at.is_none());

    let publish = UpdateBlogPost {
        slug: None,
        title: None,
        excerpt: None,
        content: None,
        cover_image_url: None,
        is_published: Some(true),
        translations: None,
        localized: Map::new(),
    };
    let published = BlogPostRepo::update(&pool, draft.id, &publish)
        .await
        .unwrap()
        .unwrap();
    let stamped = published.published_at.expect("published_at should be set");

    let again = BlogPostRepo::update(&pool, draft.id, &publish)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(again.published_at, Some(stamped));

    let listed = BlogPostRepo::list_published(&pool, 10, 0).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blog_author_set_null_on_user_delete(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "yazar".to_string(),
            email: "yazar@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: "editor".to_string(),
        },
    )
    .await
    .unwrap();

    let post = BlogPostRepo::create(&pool, "yazi", Some(user.id), &new_post("Yazı", true))
        .await
        .unwrap();
    assert_eq!(post.author_id, Some(user.id));

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let post = BlogPostRepo::find_by_id(&pool, post.id).await.unwrap().unwrap();
    assert_eq!(post.author_id, None);
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_announcement_window(pool: PgPool) {
    let now = chrono::Utc::now();

    let mut current = new_announcement("Şimdi");
    current.priority = Some(5);
    AnnouncementRepo::create(&pool, &current).await.unwrap();

    let mut future = new_announcement("Gelecek");
    future.starts_at = Some(now + chrono::Duration::days(1));
    AnnouncementRepo::create(&pool, &future).await.unwrap();

    let mut expired = new_announcement("Geçmiş");
    expired.starts_at = Some(now - chrono::Duration::days(2));
    expired.ends_at = Some(now - chrono::Duration::days(1));
    AnnouncementRepo::create(&pool, &expired).await.unwrap();

    let mut inactive = new_announcement("Kapalı");
    inactive.is_active = Some(false);
    AnnouncementRepo::create(&pool, &inactive).await.unwrap();

    let mut low = new_announcement("Düşük");
    low.priority = Some(1);
    AnnouncementRepo::create(&pool, &low).await.unwrap();

    let shown = AnnouncementRepo::list_current(&pool).await.unwrap();
    let titles: Vec<&str> = shown.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Şimdi", "Düşük"]);

    assert_eq!(AnnouncementRepo::list(&pool).await.unwrap().len(), 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_announcement_window_check_constraint(pool: PgPool) {
    let now = chrono::Utc::now();
    let mut bad = new_announcement("Ters");
    bad.starts_at = Some(now);
    bad.ends_at = Some(now - chrono::Duration::hours(1));
    let err = AnnouncementRepo::create(&pool, &bad).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));
}

// ---------------------------------------------------------------------------
// Careers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_job_applications_cascade(pool: PgPool) {
    let job = JobPostingRepo::create(&pool, "rust-gelistirici", &new_job("Rust Geliştirici"))
        .await
        .unwrap();
    assert_eq!(job.employment_type, "full-time");

    let application = JobApplicationRepo::create(
        &pool,
        &CreateJobApplication {
            job_posting_id: job.id,
            full_name: "Ayşe Yılmaz".to_string(),
            email: "ayse@example.com".to_string(),
            phone: None,
            cover_letter: Some("Merhaba".to_string()),
            resume_url: None,
            linkedin_url: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(application.status, "new");

    let reviewed = JobApplicationRepo::update_status(&pool, application.id, "reviewing")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reviewed.status, "reviewing");

    let listed = JobApplicationRepo::list_by_posting(&pool, job.id).await.unwrap();
    assert_eq!(listed.len(), 1);

    assert!(JobPostingRepo::delete(&pool, job.id).await.unwrap());
    assert!(JobApplicationRepo::find_by_id(&pool, application.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_closed_postings_not_open(pool: PgPool) {
    let mut closed = new_job("Kapanmış İlan");
    closed.closes_at = Some(chrono::Utc::now() - chrono::Duration::days(1));
    JobPostingRepo::create(&pool, "kapanmis", &closed).await.unwrap();
    JobPostingRepo::create(&pool, "acik", &new_job("Açık İlan"))
        .await
        .unwrap();

    let open = JobPostingRepo::list_open(&pool).await.unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].slug, "acik");
    assert!(JobPostingRepo::find_open_by_slug(&pool, "kapanmis")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Newsletter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_subscriber_lifecycle(pool: PgPool) {
    let (sub, outcome) = SubscriberRepo::subscribe(&pool, "okur@example.com", "tr")
        .await
        .unwrap();
    assert_eq!(outcome, SubscribeOutcome::Created);
    assert!(sub.is_active);

    let (_, outcome) = SubscriberRepo::subscribe(&pool, "okur@example.com", "tr")
        .await
        .unwrap();
    assert_eq!(outcome, SubscribeOutcome::AlreadyActive);

    assert!(SubscriberRepo::unsubscribe(&pool, sub.unsubscribe_token)
        .await
        .unwrap());
    // A spent token does nothing.
    assert!(!SubscriberRepo::unsubscribe(&pool, sub.unsubscribe_token)
        .await
        .unwrap());

    let (again, outcome) = SubscriberRepo::subscribe(&pool, "okur@example.com", "en")
        .await
        .unwrap();
    assert_eq!(outcome, SubscribeOutcome::Reactivated);
    assert_eq!(again.id, sub.id);
    assert_eq!(again.locale, "en");
    assert!(again.unsubscribed_at.is_none());
    assert_ne!(again.unsubscribe_token, sub.unsubscribe_token);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_first_signups_create_one_row(pool: PgPool) {
    for i in 0..10 {
        let email = format!("yaris{i}@example.com");
        let (a, b) = tokio::join!(
            SubscriberRepo::subscribe(&pool, &email, "tr"),
            SubscriberRepo::subscribe(&pool, &email, "tr"),
        );
        let (a, a_outcome) = a.unwrap();
        let (b, b_outcome) = b.unwrap();

        assert_eq!(a.id, b.id);
        let mut outcomes = [a_outcome, b_outcome];
        outcomes.sort_by_key(|o| *o == SubscribeOutcome::AlreadyActive);
        assert_eq!(
            outcomes,
            [SubscribeOutcome::Created, SubscribeOutcome::AlreadyActive]
        );
    }

    let all = SubscriberRepo::list(&pool, false, 100, 0).await.unwrap();
    assert_eq!(all.len(), 10);
}

// ---------------------------------------------------------------------------
// Settings & dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_upsert_keeps_visibility(pool: PgPool) {
    let saved = SettingRepo::upsert_many(
        &pool,
        &[
            UpsertSetting {
                key: "site_name".to_string(),
                value: "Heptapus".to_string(),
                is_public: None,
            },
            UpsertSetting {
                key: "analytics_id".to_string(),
                value: "G-123".to_string(),
                is_public: None,
            },
        ],
    )
    .await
    .unwrap();
    assert_eq!(saved.len(), 2);

    let site_name = SettingRepo::find(&pool, "site_name").await.unwrap().unwrap();
    assert_eq!(site_name.value, "Heptapus");
    assert!(site_name.is_public);

    let analytics = SettingRepo::find(&pool, "analytics_id").await.unwrap().unwrap();
    assert!(!analytics.is_public);

    assert!(SettingRepo::delete(&pool, "analytics_id").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_counts(pool: PgPool) {
    ProjectRepo::create(&pool, "p1", &new_project("P1", true))
        .await
        .unwrap();
    ProjectRepo::create(&pool, "p2", &new_project("P2", false))
        .await
        .unwrap();
    SubscriberRepo::subscribe(&pool, "a@example.com", "tr")
        .await
        .unwrap();

    let stats = DashboardRepo::stats(&pool).await.unwrap();
    assert_eq!(stats.published_projects, 1);
    assert_eq!(stats.published_posts, 0);
    assert_eq!(stats.active_subscribers, 1);
    assert_eq!(stats.unread_messages, 0);
}

// ---------------------------------------------------------------------------
// Login failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_login_streak_restarts_after_lock_expires(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "kilitli".to_string(),
            email: "kilitli@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: "editor".to_string(),
        },
    )
    .await
    .unwrap();

    for expected in 1..=5 {
        let count = UserRepo::increment_failed_login(&pool, user.id).await.unwrap();
        assert_eq!(count, expected);
    }
    let expired = chrono::Utc::now() - chrono::Duration::minutes(1);
    UserRepo::lock_account(&pool, user.id, expired).await.unwrap();

    let count = UserRepo::increment_failed_login(&pool, user.id).await.unwrap();
    assert_eq!(count, 1);
    let row = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert!(row.locked_until.is_none());

    // An active lock keeps counting.
    let active = chrono::Utc::now() + chrono::Duration::minutes(15);
    UserRepo::lock_account(&pool, user.id, active).await.unwrap();
    let count = UserRepo::increment_failed_login(&pool, user.id).await.unwrap();
    assert_eq!(count, 2);
    let row = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert!(row.locked_until.is_some());
}
