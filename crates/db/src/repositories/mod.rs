//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod announcement_repo;
pub mod blog_post_repo;
pub mod contact_message_repo;
pub mod dashboard_repo;
pub mod faq_repo;
pub mod job_application_repo;
pub mod job_posting_repo;
pub mod media_repo;
pub mod partner_repo;
pub mod project_repo;
pub mod setting_repo;
pub mod subdomain_repo;
pub mod subscriber_repo;
pub mod user_repo;

pub use announcement_repo::AnnouncementRepo;
pub use blog_post_repo::BlogPostRepo;
pub use contact_message_repo::ContactMessageRepo;
pub use dashboard_repo::DashboardRepo;
pub use faq_repo::FaqRepo;
pub use job_application_repo::JobApplicationRepo;
pub use job_posting_repo::JobPostingRepo;
pub use media_repo::MediaRepo;
pub use partner_repo::PartnerRepo;
pub use project_repo::ProjectRepo;
pub use setting_repo::SettingRepo;
pub use subdomain_repo::SubdomainRepo;
pub use subscriber_repo::SubscriberRepo;
pub use user_repo::UserRepo;
