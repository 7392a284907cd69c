use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    #[default]
    Work,
    Education,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub id: u64,
    #[serde(rename = "type", default)]
    pub kind: ExperienceKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ExperienceItem {
    /// The role, or the title for entries (usually education) that carry no role.
    pub fn heading(&self) -> &str {
        if self.role.is_empty() { &self.title } else { &self.role }
    }

    pub fn employer(&self) -> &str {
        if self.company.is_empty() { &self.organization } else { &self.company }
    }

    pub fn is_ongoing(&self) -> bool {
        self.end_date.as_deref().is_none_or(|d| d.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_entry_falls_back_to_title_and_organization() {
        let item: ExperienceItem = serde_json::from_str(
            r#"{
                "id": 4,
                "type": "education",
                "title": "BSc Computer Science",
                "organization": "State University",
                "start_date": "2015-09-01",
                "end_date": "2019-06-30"
            }"#,
        )
        .unwrap();

        assert_eq!(item.kind, ExperienceKind::Education);
        assert_eq!(item.heading(), "BSc Computer Science");
        assert_eq!(item.employer(), "State University");
        assert!(!item.is_ongoing());
        assert!(item.skills.is_empty());
    }

    #[test]
    fn null_end_date_means_ongoing() {
        let item: ExperienceItem = serde_json::from_str(
            r#"{"id":1,"type":"work","company":"Acme","role":"Engineer","start_date":"2021-01-01","end_date":null}"#,
        )
        .unwrap();
        assert!(item.is_ongoing());
        assert_eq!(item.heading(), "Engineer");
        assert_eq!(item.employer(), "Acme");
    }

    #[test]
    fn blank_end_date_means_ongoing() {
        let item: ExperienceItem = serde_json::from_str(
            r#"{"id":2,"type":"work","company":"Acme","role":"Engineer","start_date":"2021-01-01","end_date":""}"#,
        )
        .unwrap();
        assert!(item.is_ongoing());
    }
}
