use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
}

impl Project {
    /// Splits the tech stack into the tags shown on a card and the count hidden behind `+N`.
    pub fn tech_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.tech_stack.len().min(limit);
        (&self.tech_stack[..shown], self.tech_stack.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(tech: &[&str]) -> Project {
        Project {
            id: 1,
            title: "Atlas".into(),
            description: "Maps".into(),
            tech_stack: tech.iter().map(|t| t.to_string()).collect(),
            image: String::new(),
            github_link: None,
            live_link: None,
        }
    }

    #[test]
    fn tech_preview_reports_overflow() {
        let p = project(&["Rust", "Tokio", "Axum", "Postgres", "Redis"]);
        let (shown, hidden) = p.tech_preview(3);
        assert_eq!(shown, ["Rust", "Tokio", "Axum"]);
        assert_eq!(hidden, 2);
    }

    #[test]
    fn tech_preview_handles_empty_stack() {
        let p = project(&[]);
        let (shown, hidden) = p.tech_preview(3);
        assert!(shown.is_empty());
        assert_eq!(hidden, 0);
    }

    #[test]
    fn missing_optional_fields_deserialize() {
        let json = r#"{"id": 9, "title": "Bare", "description": "No links"}"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert!(p.tech_stack.is_empty());
        assert_eq!(p.github_link, None);
        assert_eq!(p.live_link, None);
    }
}
