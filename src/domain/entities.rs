pub mod contact_me;
pub mod education;
pub mod experience;
pub mod project;
pub mod skill;
