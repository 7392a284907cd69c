use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u64,
    pub name: String,
    pub proficiency: f64,
    pub years: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl Skill {
    /// Proficiency as shown to visitors. Values are not clamped.
    pub fn proficiency_label(&self) -> String {
        format!("{}%", self.proficiency)
    }
}
