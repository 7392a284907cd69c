use std::sync::Arc;

use crate::entities::project::Project;
use crate::repositories::portfolio_api::PortfolioApi;
use crate::use_cases::resource::{FetchState, Resource};

pub const PROJECTS_FAILURE: &str = "Failed to fetch projects";

pub struct ProjectsHook<A>
where
    A: PortfolioApi,
{
    pub api: Arc<A>,
    projects: Resource<Vec<Project>>,
}

impl<A> ProjectsHook<A>
where
    A: PortfolioApi,
{
    pub fn new(api: Arc<A>) -> Self {
        ProjectsHook { api, projects: Resource::new("projects") }
    }

    /// Loads the project list. Calling it again restarts the loading sequence.
    pub async fn fetch(&self) -> bool {
        self.projects.run(self.api.get_projects(), PROJECTS_FAILURE).await
    }

    /// Fetches one project for the detail popup without touching the list state.
    pub async fn fetch_project(&self, id: u64) -> Option<Project> {
        match self.api.get_project(id).await {
            Ok(project) => Some(project),
            Err(e) => {
                tracing::error!(project_id = id, error = %e, "Failed to fetch project");
                None
            }
        }
    }

    pub fn state(&self) -> FetchState<Vec<Project>> {
        self.projects.snapshot()
    }

    pub fn unmount(&self) {
        self.projects.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FetchError;
    use crate::repositories::portfolio_api::MockPortfolioApi;
    use crate::use_cases::test_fixtures::project;

    #[tokio::test]
    async fn loads_project_list() {
        let mut api = MockPortfolioApi::new();
        api.expect_get_projects()
            .times(1)
            .returning(|| Ok(vec![project(1, &["Rust"]), project(2, &[])]));

        let hook = ProjectsHook::new(Arc::new(api));
        assert!(hook.state().is_loading());

        assert!(hook.fetch().await);
        let state = hook.state();
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.data().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn list_failure_becomes_message() {
        let mut api = MockPortfolioApi::new();
        api.expect_get_projects()
            .returning(|| Err(FetchError::Network("connection refused".into())));

        let hook = ProjectsHook::new(Arc::new(api));
        hook.fetch().await;

        let state = hook.state();
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), Some(PROJECTS_FAILURE));
    }

    #[tokio::test]
    async fn detail_failure_returns_none_and_leaves_list_alone() {
        let mut api = MockPortfolioApi::new();
        api.expect_get_projects().returning(|| Ok(vec![project(1, &[])]));
        api.expect_get_project()
            .withf(|id| *id == 42)
            .returning(|_| Err(FetchError::Status(404)));

        let hook = ProjectsHook::new(Arc::new(api));
        hook.fetch().await;

        assert_eq!(hook.fetch_project(42).await, None);
        assert_eq!(hook.state().data().map(Vec::len), Some(1));
        assert_eq!(hook.state().error(), None);
    }

    #[tokio::test]
    async fn refetch_preserves_order() {
        let mut api = MockPortfolioApi::new();
        api.expect_get_projects()
            .times(2)
            .returning(|| Ok(vec![project(3, &["C", "B", "A"]), project(1, &[])]));

        let hook = ProjectsHook::new(Arc::new(api));
        hook.fetch().await;
        let first = hook.state();
        hook.fetch().await;

        assert_eq!(first, hook.state());
        let tech = &hook.state().into_data().unwrap()[0].tech_stack;
        assert_eq!(tech, &["C", "B", "A"]);
    }
}
