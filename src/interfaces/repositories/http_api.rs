use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::entities::{
    contact_me::{ContactFormSubmission, SocialMediaLink, UserContact},
    education::{DataEnvelope, Education, SiteSetting},
    experience::ExperienceItem,
    project::Project,
    skill::Skill,
};
use crate::errors::{AppError, FetchError};
use crate::http::client::{build_client, ensure_success, read_json};
use crate::repositories::portfolio_api::PortfolioApi;
use crate::settings::AppConfig;

#[derive(Clone)]
pub struct HttpPortfolioApi {
    client: Client,
    base_url: String,
}

impl HttpPortfolioApi {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = build_client(config)?;
        Ok(HttpPortfolioApi {
            client,
            base_url: config.api_base().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "Fetching data");

        let response = self.client.get(&url).send().await?;
        let json = read_json(response).await?;

        serde_json::from_value(json).map_err(|e| {
            tracing::error!(%url, error = %e, "Unexpected response shape");
            FetchError::UnexpectedShape(format!("{}: {}", path, e))
        })
    }

    async fn get_enveloped<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.get_json::<DataEnvelope<T>>(path).await.map(DataEnvelope::into_inner)
    }
}

#[async_trait]
impl PortfolioApi for HttpPortfolioApi {
    async fn get_projects(&self) -> Result<Vec<Project>, FetchError> {
        self.get_enveloped("/projects").await
    }

    async fn get_project(&self, id: u64) -> Result<Project, FetchError> {
        self.get_enveloped(&format!("/projects/{}", id)).await
    }

    async fn get_skills(&self) -> Result<Vec<Skill>, FetchError> {
        self.get_enveloped("/skills").await
    }

    async fn get_experiences(&self) -> Result<Vec<ExperienceItem>, FetchError> {
        self.get_json("/experiences").await
    }

    async fn get_educations(&self) -> Result<Vec<Education>, FetchError> {
        self.get_json("/educations").await
    }

    async fn get_settings(&self) -> Result<Vec<SiteSetting>, FetchError> {
        self.get_json("/settings").await
    }

    async fn get_social_media_links(&self) -> Result<Vec<SocialMediaLink>, FetchError> {
        self.get_json("/social-media").await
    }

    async fn get_admin_contact(&self) -> Result<UserContact, FetchError> {
        self.get_json("/admin-contact").await
    }

    async fn submit_contact(&self, submission: &ContactFormSubmission) -> Result<(), FetchError> {
        let url = self.endpoint("/contact");
        tracing::debug!(%url, "Submitting contact form");

        let response = self.client.post(&url).json(submission).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}
