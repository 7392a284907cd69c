use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::constants::ESCAPE_KEY;
use crate::entities::project::Project;
use crate::repositories::portfolio_api::PortfolioApi;
use crate::use_cases::projects::ProjectsHook;
use crate::web::document::{Document, KeydownSubscription, ScrollLock};

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryState {
    Idle,
    LoadingDetail { id: u64 },
    ShowingDetail(Project),
}

struct GalleryInner {
    state: GalleryState,
    generation: u64,
    scroll_lock: Option<ScrollLock>,
    escape: Option<KeydownSubscription>,
}

struct GalleryShared {
    document: Arc<dyn Document>,
    inner: Mutex<GalleryInner>,
}

impl GalleryShared {
    fn begin(&self, id: u64) -> u64 {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.state = GalleryState::LoadingDetail { id };
        inner.generation
    }

    fn finish(self: &Arc<Self>, generation: u64, detail: Option<Project>) -> bool {
        let mut released = None;
        {
            let mut inner = self.inner.lock();
            if inner.generation != generation {
                tracing::debug!(generation, current = inner.generation, "discarding superseded project detail");
                return false;
            }

            match detail {
                Some(project) => {
                    tracing::debug!(project_id = project.id, "showing project detail");
                    inner.state = GalleryState::ShowingDetail(project);
                    if inner.scroll_lock.is_none() {
                        inner.scroll_lock = Some(ScrollLock::acquire(self.document.clone()));
                    }
                    if inner.escape.is_none() {
                        inner.escape = Some(self.escape_listener());
                    }
                }
                None => {
                    inner.state = GalleryState::Idle;
                    released = Some((inner.scroll_lock.take(), inner.escape.take()));
                }
            }
        }
        drop(released);
        true
    }

    fn close(&self) {
        let released = {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            inner.state = GalleryState::Idle;
            (inner.scroll_lock.take(), inner.escape.take())
        };
        // guards touch the document, so they are dropped after the gallery lock is released
        drop(released);
    }

    fn escape_listener(self: &Arc<Self>) -> KeydownSubscription {
        let weak: Weak<GalleryShared> = Arc::downgrade(self);
        KeydownSubscription::attach(
            self.document.clone(),
            Arc::new(move |key: &str| {
                if key == ESCAPE_KEY {
                    if let Some(shared) = weak.upgrade() {
                        shared.close();
                    }
                }
            }),
        )
    }
}

/// Project cards plus the detail popup.
///
/// `Idle → LoadingDetail → ShowingDetail → Idle`. The newest click wins; while a
/// detail is showing the body scroll is locked and Escape closes the popup.
/// Dropping the gallery releases both.
pub struct ProjectGallery<A>
where
    A: PortfolioApi,
{
    projects: Arc<ProjectsHook<A>>,
    shared: Arc<GalleryShared>,
}

impl<A> ProjectGallery<A>
where
    A: PortfolioApi,
{
    pub fn new(projects: Arc<ProjectsHook<A>>, document: Arc<dyn Document>) -> Self {
        ProjectGallery {
            projects,
            shared: Arc::new(GalleryShared {
                document,
                inner: Mutex::new(GalleryInner {
                    state: GalleryState::Idle,
                    generation: 0,
                    scroll_lock: None,
                    escape: None,
                }),
            }),
        }
    }

    /// Card click: fetch the detail for `id` and show it unless a newer click or a close got there first.
    pub async fn open(&self, id: u64) -> GalleryState {
        let generation = self.shared.begin(id);
        let detail = self.projects.fetch_project(id).await;
        self.shared.finish(generation, detail);
        self.state()
    }

    /// Close button, overlay click or Escape.
    pub fn close(&self) {
        self.shared.close();
    }

    pub fn state(&self) -> GalleryState {
        self.shared.inner.lock().state.clone()
    }

    pub fn selected(&self) -> Option<Project> {
        match self.state() {
            GalleryState::ShowingDetail(project) => Some(project),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use crate::entities::{
        contact_me::{ContactFormSubmission, SocialMediaLink, UserContact},
        education::{Education, SiteSetting},
        experience::ExperienceItem,
        skill::Skill,
    };
    use crate::errors::FetchError;
    use crate::repositories::portfolio_api::MockPortfolioApi;
    use crate::use_cases::test_fixtures::project;
    use crate::web::document::{HeadlessDocument, Overflow};

    /// Project details resolve only when the test sends them.
    #[derive(Default)]
    struct GatedApi {
        gates: Mutex<HashMap<u64, oneshot::Receiver<Option<Project>>>>,
    }

    impl GatedApi {
        fn gate(&self, id: u64) -> oneshot::Sender<Option<Project>> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().insert(id, rx);
            tx
        }
    }

    #[async_trait]
    impl PortfolioApi for GatedApi {
        async fn get_projects(&self) -> Result<Vec<Project>, FetchError> {
            Ok(Vec::new())
        }
        async fn get_project(&self, id: u64) -> Result<Project, FetchError> {
            let gate = self.gates.lock().remove(&id);
            match gate {
                Some(rx) => rx.await.ok().flatten().ok_or(FetchError::Status(404)),
                None => Err(FetchError::Status(404)),
            }
        }
        async fn get_skills(&self) -> Result<Vec<Skill>, FetchError> {
            Ok(Vec::new())
        }
        async fn get_experiences(&self) -> Result<Vec<ExperienceItem>, FetchError> {
            Ok(Vec::new())
        }
        async fn get_educations(&self) -> Result<Vec<Education>, FetchError> {
            Ok(Vec::new())
        }
        async fn get_settings(&self) -> Result<Vec<SiteSetting>, FetchError> {
            Ok(Vec::new())
        }
        async fn get_social_media_links(&self) -> Result<Vec<SocialMediaLink>, FetchError> {
            Ok(Vec::new())
        }
        async fn get_admin_contact(&self) -> Result<UserContact, FetchError> {
            Err(FetchError::Status(404))
        }
        async fn submit_contact(&self, _submission: &ContactFormSubmission) -> Result<(), FetchError> {
            Ok(())
        }
    }

    fn gallery_with<A: PortfolioApi>(api: A) -> (ProjectGallery<A>, Arc<HeadlessDocument>) {
        let doc = Arc::new(HeadlessDocument::new());
        let hook = Arc::new(ProjectsHook::new(Arc::new(api)));
        (ProjectGallery::new(hook, doc.clone()), doc)
    }

    fn immediate_api() -> MockPortfolioApi {
        let mut api = MockPortfolioApi::new();
        api.expect_get_project().returning(|id| Ok(project(id, &["Rust"])));
        api
    }

    #[tokio::test]
    async fn click_fetches_that_project_and_locks_scroll() {
        let (gallery, doc) = gallery_with(immediate_api());

        let state = gallery.open(5).await;

        assert_eq!(state, GalleryState::ShowingDetail(project(5, &["Rust"])));
        assert_eq!(doc.body_overflow(), Overflow::Hidden);
        assert_eq!(doc.listener_count(), 1);
    }

    #[tokio::test]
    async fn state_is_loading_while_detail_is_in_flight() {
        let api = GatedApi::default();
        let tx = api.gate(5);
        let (gallery, doc) = gallery_with(api);

        let open = gallery.open(5);
        let probe = async {
            tokio::task::yield_now().await;
            let during = gallery.state();
            tx.send(Some(project(5, &[]))).unwrap();
            during
        };
        let (after, during) = tokio::join!(open, probe);

        assert_eq!(during, GalleryState::LoadingDetail { id: 5 });
        assert!(matches!(after, GalleryState::ShowingDetail(p) if p.id == 5));
        assert_eq!(doc.scroll_lock_count(), 1);
    }

    #[tokio::test]
    async fn last_click_wins_and_scroll_locks_once() {
        let api = GatedApi::default();
        let tx5 = api.gate(5);
        let tx7 = api.gate(7);
        let (gallery, doc) = gallery_with(api);

        let driver = async {
            tokio::task::yield_now().await;
            tx7.send(Some(project(7, &[]))).unwrap();
            tokio::task::yield_now().await;
            tx5.send(Some(project(5, &[]))).unwrap();
        };
        tokio::join!(gallery.open(5), gallery.open(7), driver);

        assert_eq!(gallery.selected().map(|p| p.id), Some(7));
        assert_eq!(doc.scroll_lock_count(), 1);
        assert_eq!(doc.listener_count(), 1);

        gallery.close();
        assert_eq!(gallery.state(), GalleryState::Idle);
        assert_eq!(doc.scroll_lock_count(), 1);
        assert_eq!(doc.scroll_unlock_count(), 1);
        assert_eq!(doc.body_overflow(), Overflow::Auto);
    }

    #[tokio::test]
    async fn late_answer_for_the_first_click_is_ignored_even_if_it_arrives_last() {
        let api = GatedApi::default();
        let tx5 = api.gate(5);
        let tx7 = api.gate(7);
        let (gallery, _doc) = gallery_with(api);

        let driver = async {
            tokio::task::yield_now().await;
            tx5.send(Some(project(5, &[]))).unwrap();
            tokio::task::yield_now().await;
            tx7.send(Some(project(7, &[]))).unwrap();
        };
        tokio::join!(gallery.open(5), gallery.open(7), driver);

        assert_eq!(gallery.selected().map(|p| p.id), Some(7));
    }

    #[tokio::test]
    async fn escape_closes_and_detaches_listener() {
        let (gallery, doc) = gallery_with(immediate_api());
        gallery.open(5).await;

        doc.dispatch_keydown("Enter");
        assert!(gallery.selected().is_some());

        doc.dispatch_keydown("Escape");
        assert_eq!(gallery.state(), GalleryState::Idle);
        assert_eq!(doc.listener_count(), 0);
        assert_eq!(doc.scroll_unlock_count(), 1);

        let deliveries = doc.keydown_deliveries();
        doc.dispatch_keydown("Escape");
        assert_eq!(doc.keydown_deliveries(), deliveries);
        assert_eq!(doc.scroll_unlock_count(), 1);
    }

    #[tokio::test]
    async fn failed_detail_shows_nothing() {
        let mut api = MockPortfolioApi::new();
        api.expect_get_project().returning(|_| Err(FetchError::Status(500)));
        let (gallery, doc) = gallery_with(api);

        assert_eq!(gallery.open(3).await, GalleryState::Idle);
        assert_eq!(doc.scroll_lock_count(), 0);
        assert_eq!(doc.listener_count(), 0);
    }

    #[tokio::test]
    async fn close_while_loading_discards_the_detail() {
        let api = GatedApi::default();
        let tx = api.gate(5);
        let (gallery, doc) = gallery_with(api);

        let driver = async {
            tokio::task::yield_now().await;
            gallery.close();
            tx.send(Some(project(5, &[]))).unwrap();
        };
        tokio::join!(gallery.open(5), driver);

        assert_eq!(gallery.state(), GalleryState::Idle);
        assert_eq!(doc.scroll_lock_count(), 0);
    }

    #[tokio::test]
    async fn unmount_releases_lock_and_listener() {
        let (gallery, doc) = gallery_with(immediate_api());
        gallery.open(1).await;
        assert_eq!(doc.listener_count(), 1);

        drop(gallery);

        assert_eq!(doc.listener_count(), 0);
        assert_eq!(doc.body_overflow(), Overflow::Auto);
        assert_eq!(doc.scroll_unlock_count(), 1);
    }
}
