use std::sync::Arc;

use crate::entities::skill::Skill;
use crate::repositories::portfolio_api::PortfolioApi;
use crate::use_cases::resource::{FetchState, Resource};

pub const SKILLS_FAILURE: &str = "Failed to load skills";

pub struct SkillsHook<A>
where
    A: PortfolioApi,
{
    pub api: Arc<A>,
    skills: Resource<Vec<Skill>>,
}

impl<A> SkillsHook<A>
where
    A: PortfolioApi,
{
    pub fn new(api: Arc<A>) -> Self {
        SkillsHook { api, skills: Resource::new("skills") }
    }

    pub async fn fetch(&self) -> bool {
        self.skills.run(self.api.get_skills(), SKILLS_FAILURE).await
    }

    pub fn state(&self) -> FetchState<Vec<Skill>> {
        self.skills.snapshot()
    }

    /// Looks a skill up in the loaded list; the overlay needs no extra request.
    pub fn find(&self, id: u64) -> Option<Skill> {
        self.state()
            .into_data()
            .and_then(|skills| skills.into_iter().find(|s| s.id == id))
    }

    pub fn unmount(&self) {
        self.skills.unmount();
    }
}
