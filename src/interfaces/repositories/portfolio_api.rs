use async_trait::async_trait;

use crate::entities::{
    contact_me::{ContactFormSubmission, SocialMediaLink, UserContact},
    education::{Education, SiteSetting},
    experience::ExperienceItem,
    project::Project,
    skill::Skill,
};
use crate::errors::FetchError;

/// The read-mostly REST API behind the site.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// `GET /projects` → `{data: Project[]}`
    async fn get_projects(&self) -> Result<Vec<Project>, FetchError>;
    /// `GET /projects/{id}` → `{data: Project}`
    async fn get_project(&self, id: u64) -> Result<Project, FetchError>;
    /// `GET /skills` → `{data: Skill[]}`; a bare array is an unexpected shape.
    async fn get_skills(&self) -> Result<Vec<Skill>, FetchError>;
    async fn get_experiences(&self) -> Result<Vec<ExperienceItem>, FetchError>;
    async fn get_educations(&self) -> Result<Vec<Education>, FetchError>;
    async fn get_settings(&self) -> Result<Vec<SiteSetting>, FetchError>;
    async fn get_social_media_links(&self) -> Result<Vec<SocialMediaLink>, FetchError>;
    async fn get_admin_contact(&self) -> Result<UserContact, FetchError>;
    /// `POST /contact`. Only the status is checked; no validation happens here.
    async fn submit_contact(&self, submission: &ContactFormSubmission) -> Result<(), FetchError>;
}
