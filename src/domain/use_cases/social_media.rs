use std::sync::Arc;

use crate::entities::contact_me::{SocialMediaLink, UserContact};
use crate::errors::FetchError;
use crate::repositories::portfolio_api::PortfolioApi;
use crate::use_cases::resource::{FetchState, Resource};

pub const SOCIAL_LINKS_FAILURE: &str = "Failed to load social media links";
pub const CONTACT_INFO_FAILURE: &str = "Failed to load contact information";

/// Social links for the footer.
pub struct SocialLinksHook<A>
where
    A: PortfolioApi,
{
    pub api: Arc<A>,
    links: Resource<Vec<SocialMediaLink>>,
}

impl<A> SocialLinksHook<A>
where
    A: PortfolioApi,
{
    pub fn new(api: Arc<A>) -> Self {
        SocialLinksHook { api, links: Resource::new("social_media") }
    }

    pub async fn fetch(&self) -> bool {
        self.links.run(self.api.get_social_media_links(), SOCIAL_LINKS_FAILURE).await
    }

    pub fn state(&self) -> FetchState<Vec<SocialMediaLink>> {
        self.links.snapshot()
    }

    pub fn unmount(&self) {
        self.links.unmount();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetails {
    pub links: Vec<SocialMediaLink>,
    pub contact: UserContact,
}

/// Admin contact plus social links, requested together; either failing fails both.
pub struct ContactInfoHook<A>
where
    A: PortfolioApi,
{
    pub api: Arc<A>,
    details: Resource<ContactDetails>,
}

impl<A> ContactInfoHook<A>
where
    A: PortfolioApi,
{
    pub fn new(api: Arc<A>) -> Self {
        ContactInfoHook { api, details: Resource::new("contact_info") }
    }

    pub async fn fetch(&self) -> bool {
        let api = &self.api;
        let request = async {
            let (links, contact) =
                futures::try_join!(api.get_social_media_links(), api.get_admin_contact())?;
            Ok::<_, FetchError>(ContactDetails { links, contact })
        };
        self.details.run(request, CONTACT_INFO_FAILURE).await
    }

    pub fn state(&self) -> FetchState<ContactDetails> {
        self.details.snapshot()
    }

    pub fn unmount(&self) {
        self.details.unmount();
    }
}
