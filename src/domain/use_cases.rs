pub mod contact;
pub mod experiences;
pub mod navigation;
pub mod project_gallery;
pub mod projects;
pub mod resource;
pub mod skill_gallery;
pub mod skills;
pub mod social_media;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_fixtures;
