use std::sync::Arc;

use chrono::Datelike;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{repositories, views};
pub use infrastructure::{http, utils, web};

use constants::{SECTION_IDS, START_TIME};
use errors::ContactError;
use repositories::{http_api::HttpPortfolioApi, portfolio_api::PortfolioApi, preferences::PreferenceStore};
use settings::AppConfig;
use use_cases::{
    contact::ContactForm,
    experiences::{EducationsHook, ExperiencesHook, SiteSettingsHook},
    navigation::NavigationState,
    project_gallery::{GalleryState, ProjectGallery},
    projects::ProjectsHook,
    skill_gallery::SkillGallery,
    skills::SkillsHook,
    social_media::{ContactInfoHook, SocialLinksHook},
    theme::{ThemeMode, ThemeState},
};
use web::{document::Document, markup::Node};

/// The mounted page: every hook, the theme context and the interactive widgets, sharing one API client.
pub struct PortfolioApp<A>
where
    A: PortfolioApi,
{
    pub config: AppConfig,
    pub api: Arc<A>,
    pub theme: ThemeState,
    pub navigation: NavigationState,
    pub projects: Arc<ProjectsHook<A>>,
    pub gallery: ProjectGallery<A>,
    pub skills: SkillsHook<A>,
    pub skill_gallery: SkillGallery,
    pub experiences: ExperiencesHook<A>,
    pub educations: EducationsHook<A>,
    pub site_settings: SiteSettingsHook<A>,
    pub social_links: SocialLinksHook<A>,
    pub contact_info: ContactInfoHook<A>,
    pub contact_form: ContactForm<A>,
}

pub type HttpPortfolioApp = PortfolioApp<HttpPortfolioApi>;

impl<A> PortfolioApp<A>
where
    A: PortfolioApi,
{
    pub fn new(
        config: AppConfig,
        api: Arc<A>,
        store: Arc<dyn PreferenceStore>,
        document: Arc<dyn Document>,
    ) -> Self {
        let projects = Arc::new(ProjectsHook::new(api.clone()));

        PortfolioApp {
            theme: ThemeState::init(store, document.clone()),
            navigation: NavigationState::new(),
            gallery: ProjectGallery::new(projects.clone(), document.clone()),
            projects,
            skills: SkillsHook::new(api.clone()),
            skill_gallery: SkillGallery::new(document),
            experiences: ExperiencesHook::new(api.clone()),
            educations: EducationsHook::new(api.clone()),
            site_settings: SiteSettingsHook::new(api.clone()),
            social_links: SocialLinksHook::new(api.clone()),
            contact_info: ContactInfoHook::new(api.clone()),
            contact_form: ContactForm::new(api.clone()),
            api,
            config,
        }
    }

    /// Starts every hook's fetch concurrently and waits until all of them settle.
    pub async fn mount(&self) {
        tracing::info!(api = %self.config.api_base(), "Mounting portfolio");

        futures::join!(
            self.projects.fetch(),
            self.skills.fetch(),
            self.experiences.fetch(),
            self.educations.fetch(),
            self.site_settings.fetch(),
            self.social_links.fetch(),
            self.contact_info.fetch(),
        );

        tracing::info!("All resources settled");
    }

    /// Retry button handler. Returns `false` for an unknown resource name.
    pub async fn retry(&self, resource: &str) -> bool {
        match resource {
            "projects" => self.projects.fetch().await,
            "skills" => self.skills.fetch().await,
            "experiences" => self.experiences.fetch().await,
            "contact" => self.contact_info.fetch().await,
            "social_media" => self.social_links.fetch().await,
            other => {
                tracing::warn!(resource = other, "Retry requested for unknown resource");
                false
            }
        }
    }

    pub async fn open_project(&self, id: u64) -> GalleryState {
        self.gallery.open(id).await
    }

    /// Opens the skill overlay for a loaded skill.
    pub fn select_skill(&self, id: u64) -> bool {
        match self.skills.find(id) {
            Some(skill) => {
                self.skill_gallery.select(skill);
                true
            }
            None => false,
        }
    }

    pub async fn submit_contact(&self) -> Result<(), ContactError> {
        self.contact_form.submit().await
    }

    pub fn toggle_theme(&self) -> ThemeMode {
        self.theme.toggle()
    }

    pub fn render(&self) -> Node {
        let mode = self.theme.mode();
        let selected_skill = self.skill_gallery.selected();
        let contact_form = self.contact_form.fields();

        let sections = SECTION_IDS
            .iter()
            .map(|&id| {
                let content = match id {
                    "about" => views::about::render_about(&self.config, mode),
                    "projects" => views::projects::render_projects(&self.projects.state(), &self.gallery.state(), mode),
                    "skills" => views::skills::render_skills(&self.skills.state(), selected_skill.as_ref(), mode),
                    "experience" => views::experience::render_experience(&self.experiences.state(), mode),
                    _ => views::contact::render_contact(
                        &self.contact_info.state(),
                        &contact_form,
                        self.contact_form.status(),
                        mode,
                    ),
                };
                (id, content)
            })
            .collect();

        views::layout::render_page(
            mode,
            views::layout::render_nav(self.navigation.snapshot(), &self.config.owner_name, mode),
            views::hero::render_hero(&self.config, mode),
            sections,
            views::footer::render_footer(&self.social_links.state(), &self.config.name, START_TIME.year(), mode),
        )
    }

    pub fn render_html(&self) -> String {
        format!("<!DOCTYPE html>{}", self.render().render())
    }

    /// Tears the page down: late responses are discarded and the popups release the document.
    pub fn unmount(&self) {
        self.projects.unmount();
        self.skills.unmount();
        self.experiences.unmount();
        self.educations.unmount();
        self.site_settings.unmount();
        self.social_links.unmount();
        self.contact_info.unmount();
        self.gallery.close();
        self.skill_gallery.close();
        tracing::info!("Portfolio unmounted");
    }
}
