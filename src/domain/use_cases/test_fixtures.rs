use crate::entities::{
    contact_me::{SocialMediaLink, UserContact},
    experience::{ExperienceItem, ExperienceKind},
    project::Project,
    skill::Skill,
};

pub fn project(id: u64, tech: &[&str]) -> Project {
    Project {
        id,
        title: format!("Project {id}"),
        description: format!("Description {id}"),
        tech_stack: tech.iter().map(|t| t.to_string()).collect(),
        image: format!("https://img.example.com/{id}.png"),
        github_link: Some(format!("https://github.com/dev/p{id}")),
        live_link: None,
    }
}

pub fn skill(id: u64, name: &str, proficiency: f64) -> Skill {
    Skill {
        id,
        name: name.to_string(),
        proficiency,
        years: 3.0,
        category: "Language".to_string(),
        description: format!("{name} in production"),
    }
}

pub fn experience(id: u64, kind: ExperienceKind, start: &str, end: Option<&str>) -> ExperienceItem {
    ExperienceItem {
        id,
        kind,
        title: format!("Title {id}"),
        organization: format!("Org {id}"),
        company: String::new(),
        role: format!("Role {id}"),
        start_date: start.to_string(),
        end_date: end.map(str::to_string),
        description: format!("Did things {id}"),
        skills: vec!["Rust".to_string(), "SQL".to_string()],
    }
}

pub fn social(id: u64, platform: &str) -> SocialMediaLink {
    SocialMediaLink {
        id,
        platform: platform.to_string(),
        link: format!("https://{}.example.com/dev", platform.to_lowercase()),
        icon: None,
    }
}

pub fn admin_contact() -> UserContact {
    UserContact {
        email: "dev@example.com".to_string(),
        phone: "+1 555 0100".to_string(),
    }
}
