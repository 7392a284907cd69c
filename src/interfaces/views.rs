pub mod about;
pub mod common;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod layout;
pub mod project_popup;
pub mod projects;
pub mod skills;
