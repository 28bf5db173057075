use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::YearMonth;

static CONFIG_FILE: &str = "portfolio.json";

static GLOBAL_PORTFOLIO: LazyLock<Result<PortfolioConfig, PortfolioError>> =
    LazyLock::new(|| load(CONFIG_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("Portfolio content not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse portfolio content: {0}")]
    ParseError(String),
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("Invalid date '{value}' in experience entry {id}")]
    InvalidDate { id: String, value: String },
    #[error("Proficiency {value} of skill {skill} is outside 0-100")]
    Proficiency { skill: String, value: u8 },
    #[error("Section {0} appears more than once in navigation")]
    DuplicateNav(SectionId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// The DOM id of the section's anchor element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Tools,
    Databases,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
        SkillCategory::Databases,
        SkillCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Tools => "tools",
            SkillCategory::Databases => "databases",
            SkillCategory::Other => "other",
        }
    }

    /// Heading used for the grouped skill cards.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Tools => "Tools & DevOps",
            SkillCategory::Databases => "Databases",
            SkillCategory::Other => "Other",
        }
    }

    /// Identifier with its first letter upper-cased, used on the radar axes.
    pub fn title(&self) -> String {
        let id = self.as_str();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
        ProjectStatus::Planned,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Work,
    Education,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub bio: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: u8,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub role: String,
    pub start_date: String,
    /// `None` while the position is ongoing.
    pub end_date: Option<String>,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub label: String,
    pub section_id: SectionId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub personal: PersonalInfo,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub nav_items: Vec<NavItem>,
}

impl PortfolioConfig {
    /// Checks the invariants serde can't express.
    pub fn validate(&self) -> Result<(), PortfolioError> {
        if let Some(skill) = self.skills.iter().find(|s| s.proficiency > 100) {
            return Err(PortfolioError::Proficiency {
                skill: skill.name.clone(),
                value: skill.proficiency,
            });
        }

        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id.as_str()) {
                return Err(PortfolioError::DuplicateId {
                    kind: "project",
                    id: project.id.clone(),
                });
            }
        }

        let mut ids = HashSet::new();
        for entry in &self.experience {
            if !ids.insert(entry.id.as_str()) {
                return Err(PortfolioError::DuplicateId {
                    kind: "experience",
                    id: entry.id.clone(),
                });
            }
            let dates = std::iter::once(entry.start_date.as_str()).chain(entry.end_date.as_deref());
            for date in dates {
                if date.parse::<YearMonth>().is_err() {
                    return Err(PortfolioError::InvalidDate {
                        id: entry.id.clone(),
                        value: date.to_string(),
                    });
                }
            }
        }

        let mut sections = HashSet::new();
        for item in &self.nav_items {
            if !sections.insert(item.section_id) {
                return Err(PortfolioError::DuplicateNav(item.section_id));
            }
        }

        Ok(())
    }
}

impl std::str::FromStr for PortfolioConfig {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config = serde_json::from_str::<PortfolioConfig>(s)
            .map_err(|e| PortfolioError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn load(name: &str) -> Result<PortfolioConfig, PortfolioError> {
    let file = Content::get(name).ok_or_else(|| PortfolioError::NotFound(name.to_string()))?;
    let text = std::str::from_utf8(&file.data)
        .map_err(|e| PortfolioError::ParseError(e.to_string()))?;
    text.parse()
}

/// The site's content, loaded from the embedded `portfolio.json` on first use.
pub fn portfolio() -> Result<&'static PortfolioConfig, PortfolioError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> serde_json::Value {
        serde_json::json!({
            "personal": {
                "name": "Jane Roe",
                "title": "Engineer",
                "subtitle": "Builds things",
                "bio": "Bio",
                "email": "jane@example.com",
                "location": "Earth"
            },
            "skills": [
                { "name": "Rust", "category": "languages", "proficiency": 90 }
            ],
            "projects": [
                {
                    "id": "p1",
                    "title": "One",
                    "description": "First",
                    "status": "in-progress",
                    "featured": false
                }
            ],
            "experience": [
                {
                    "id": "e1",
                    "company": "Acme",
                    "role": "Dev",
                    "startDate": "2020-01",
                    "endDate": null,
                    "description": "Work",
                    "type": "work"
                }
            ],
            "navItems": [{ "label": "About", "sectionId": "about" }]
        })
    }

    #[test]
    fn test_embedded_portfolio_loads() {
        let config = portfolio().expect("embedded portfolio should be valid");
        assert_eq!(config.personal.name, "John Doe");
        assert_eq!(config.skills.len(), 22);
        assert_eq!(config.projects.len(), 6);
        assert_eq!(config.experience.len(), 3);
        assert_eq!(config.nav_items.len(), 5);
        assert_eq!(config.projects[4].status, ProjectStatus::InProgress);
        assert_eq!(config.experience[0].end_date, None);
        assert_eq!(config.experience[2].kind, ExperienceKind::Education);
    }

    #[test]
    fn test_optional_fields_default() {
        let config: PortfolioConfig = minimal().to_string().parse().unwrap();
        assert!(config.personal.social_links.is_empty());
        assert!(config.personal.resume_url.is_none());
        assert!(config.projects[0].long_description.is_none());
        assert!(config.projects[0].tech_stack.is_empty());
        assert!(config.experience[0].highlights.is_empty());
        assert_eq!(config.nav_items[0].section_id, SectionId::About);
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let mut value = minimal();
        value["skills"][0]["category"] = "cooking".into();
        let err = value.to_string().parse::<PortfolioConfig>().unwrap_err();
        assert!(matches!(err, PortfolioError::ParseError(_)));

        let mut value = minimal();
        value["navItems"][0]["sectionId"] = "blog".into();
        assert!(value.to_string().parse::<PortfolioConfig>().is_err());
    }

    #[test]
    fn test_proficiency_over_100_rejected() {
        let mut value = minimal();
        value["skills"][0]["proficiency"] = 120.into();
        let err = value.to_string().parse::<PortfolioConfig>().unwrap_err();
        assert_eq!(
            err,
            PortfolioError::Proficiency {
                skill: "Rust".to_string(),
                value: 120
            }
        );
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let mut value = minimal();
        let project = value["projects"][0].clone();
        value["projects"].as_array_mut().unwrap().push(project);
        let err = value.to_string().parse::<PortfolioConfig>().unwrap_err();
        assert_eq!(
            err,
            PortfolioError::DuplicateId {
                kind: "project",
                id: "p1".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_experience_date_rejected() {
        let mut value = minimal();
        value["experience"][0]["endDate"] = "2021-13".into();
        let err = value.to_string().parse::<PortfolioConfig>().unwrap_err();
        assert_eq!(
            err,
            PortfolioError::InvalidDate {
                id: "e1".to_string(),
                value: "2021-13".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_nav_section_rejected() {
        let mut value = minimal();
        let item = value["navItems"][0].clone();
        value["navItems"].as_array_mut().unwrap().push(item);
        let err = value.to_string().parse::<PortfolioConfig>().unwrap_err();
        assert_eq!(err, PortfolioError::DuplicateNav(SectionId::About));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(SkillCategory::Tools.label(), "Tools & DevOps");
        assert_eq!(SkillCategory::Tools.title(), "Tools");
        assert_eq!(SkillCategory::Databases.title(), "Databases");
        assert_eq!(ProjectStatus::InProgress.label(), "In Progress");
        assert_eq!(SectionId::Experience.to_string(), "experience");
    }

    #[test]
    fn test_section_anchors_are_unique() {
        let mut anchors = SectionId::ALL.map(|s| s.as_str()).to_vec();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), SectionId::ALL.len());
        assert!(anchors.iter().all(|a| a.chars().all(|c| c.is_ascii_lowercase())));
    }
}
