use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(Portfolio::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Portfolio content not found")]
    Missing,
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(String),
    #[error("Invalid portfolio content: {0}")]
    Invalid(String),
}

/// Sections of the page in scroll order. Navigation anchors are derived from
/// this list so every link has a matching section id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.strip_prefix('#').unwrap_or(id);
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub resume_url: String,
    pub portrait_url: String,
    pub about: Vec<String>,
    #[serde(default)]
    pub core_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroSlide {
    pub left_label: String,
    pub title: String,
    pub right_label: String,
    pub background: String,
    pub image_filter: Option<String>,
    pub overlay: Option<String>,
}

impl HeroSlide {
    pub fn words(&self) -> Vec<&str> {
        self.title.split_whitespace().collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Primary,
    Accent,
}

impl Accent {
    pub fn text_class(self) -> &'static str {
        match self {
            Accent::Primary => "text-primary",
            Accent::Accent => "text-accent",
        }
    }

    pub fn bg_class(self) -> &'static str {
        match self {
            Accent::Primary => "bg-primary",
            Accent::Accent => "bg-accent",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub accent: Accent,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub number: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub live_url: String,
    pub github_url: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientProject {
    pub title: String,
    pub description: String,
    pub image: String,
    pub live_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Social {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    pub hero_slides: Vec<HeroSlide>,
    pub experiences: Vec<ExperienceEntry>,
    pub skill_categories: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub client_projects: Vec<ClientProject>,
    pub socials: Vec<Social>,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PORTFOLIO_FILE).ok_or(ContentError::Missing)?;
        Self::from_json(&file.data)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_slice(data).map_err(|e| ContentError::Parse(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile name is empty".to_string()));
        }
        if self.hero_slides.is_empty() {
            return Err(ContentError::Invalid("no hero slides".to_string()));
        }
        for category in &self.skill_categories {
            if let Some(skill) = category.skills.iter().find(|s| s.level > 100) {
                return Err(ContentError::Invalid(format!(
                    "skill {} has level {} above 100",
                    skill.name, skill.level
                )));
            }
        }
        let total = self.projects.len();
        for (i, project) in self.projects.iter().enumerate() {
            let expected = project_number(i, total);
            if project.number != expected {
                return Err(ContentError::Invalid(format!(
                    "project {} is numbered {} but should be {}",
                    project.title, project.number, expected
                )));
            }
        }
        Ok(())
    }
}

pub fn project_number(index: usize, total: usize) -> String {
    format!("{:02}/{:02}", index + 1, total)
}

pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = portfolio().expect("embedded portfolio should load");
        assert_eq!(portfolio.profile.name, "Rishi Patel");
        assert_eq!(portfolio.hero_slides.len(), 4);
        assert_eq!(portfolio.experiences.len(), 3);
        assert_eq!(portfolio.skill_categories.len(), 4);
        assert_eq!(portfolio.projects.len(), 4);
    }

    #[test]
    fn test_nav_anchors_match_section_ids() {
        for section in SectionId::ALL {
            let href = section.href();
            assert!(href.starts_with('#'));
            assert_eq!(SectionId::from_id(&href), Some(section));
            assert_eq!(SectionId::from_id(section.id()), Some(section));
        }
        assert_eq!(SectionId::from_id("#blog"), None);
        assert_eq!(SectionId::ALL[0], SectionId::Home);
        assert_eq!(SectionId::ALL[5], SectionId::Contact);
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        let portfolio = portfolio().unwrap();
        for category in &portfolio.skill_categories {
            assert!(!category.skills.is_empty());
            assert!(category.skills.iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn test_rejects_skill_level_above_100() {
        let mut portfolio = portfolio().unwrap().clone();
        portfolio.skill_categories[0].skills[0].level = 101;
        assert!(matches!(
            portfolio.validate(),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_misnumbered_project() {
        let mut portfolio = portfolio().unwrap().clone();
        portfolio.projects.swap(0, 1);
        assert!(matches!(
            portfolio.validate(),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_empty_hero() {
        let mut portfolio = portfolio().unwrap().clone();
        portfolio.hero_slides.clear();
        assert_eq!(
            portfolio.validate(),
            Err(ContentError::Invalid("no hero slides".to_string()))
        );
    }

    #[test]
    fn test_parse_error() {
        let err = Portfolio::from_json(b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_project_number_format() {
        assert_eq!(project_number(0, 4), "01/04");
        assert_eq!(project_number(9, 12), "10/12");
    }

    #[test]
    fn test_hero_words() {
        let portfolio = portfolio().unwrap();
        assert_eq!(
            portfolio.hero_slides[3].words(),
            vec!["Iterate", "&", "refine"]
        );
    }

    #[test]
    fn test_accent_defaults_to_primary() {
        let category: SkillCategory = serde_json::from_str(
            r#"{"title":"X","description":"Y","skills":[{"name":"Z","level":5}]}"#,
        )
        .unwrap();
        assert_eq!(category.accent, Accent::Primary);
    }
}
