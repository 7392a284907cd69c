use std::sync::Arc;

use crate::entities::education::{Education, SiteSetting};
use crate::entities::experience::ExperienceItem;
use crate::repositories::portfolio_api::PortfolioApi;
use crate::use_cases::resource::{FetchState, Resource};

pub const EXPERIENCES_FAILURE: &str = "Failed to load experiences";

pub struct ExperiencesHook<A>
where
    A: PortfolioApi,
{
    pub api: Arc<A>,
    experiences: Resource<Vec<ExperienceItem>>,
}

impl<A> ExperiencesHook<A>
where
    A: PortfolioApi,
{
    pub fn new(api: Arc<A>) -> Self {
        ExperiencesHook { api, experiences: Resource::new("experiences") }
    }

    pub async fn fetch(&self) -> bool {
        self.experiences.run(self.api.get_experiences(), EXPERIENCES_FAILURE).await
    }

    pub fn state(&self) -> FetchState<Vec<ExperienceItem>> {
        self.experiences.snapshot()
    }

    pub fn unmount(&self) {
        self.experiences.unmount();
    }
}

/// `/educations`: fetched alongside the timeline, not rendered.
pub struct EducationsHook<A>
where
    A: PortfolioApi,
{
    pub api: Arc<A>,
    educations: Resource<Vec<Education>>,
}

impl<A> EducationsHook<A>
where
    A: PortfolioApi,
{
    pub fn new(api: Arc<A>) -> Self {
        EducationsHook { api, educations: Resource::new("educations") }
    }

    pub async fn fetch(&self) -> bool {
        self.educations.run(self.api.get_educations(), "Failed to load educations").await
    }

    pub fn state(&self) -> FetchState<Vec<Education>> {
        self.educations.snapshot()
    }

    pub fn unmount(&self) {
        self.educations.unmount();
    }
}

/// `/settings`: fetched, currently unused by any view.
pub struct SiteSettingsHook<A>
where
    A: PortfolioApi,
{
    pub api: Arc<A>,
    settings: Resource<Vec<SiteSetting>>,
}

impl<A> SiteSettingsHook<A>
where
    A: PortfolioApi,
{
    pub fn new(api: Arc<A>) -> Self {
        SiteSettingsHook { api, settings: Resource::new("settings") }
    }

    pub async fn fetch(&self) -> bool {
        self.settings.run(self.api.get_settings(), "Failed to load settings").await
    }

    pub fn state(&self) -> FetchState<Vec<SiteSetting>> {
        self.settings.snapshot()
    }

    pub fn unmount(&self) {
        self.settings.unmount();
    }
}
