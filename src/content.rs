use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::motion::{gradient::Keyframes, MotionConfig};

pub const PORTFOLIO_FILE: &str = "portfolio.json";

static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| load(PORTFOLIO_FILE));
static EMPTY_PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(Portfolio::default);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse content: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Social {
    pub label: String,
    pub href: String,
    pub display: String,
    /// Icon font class.
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub target: u64,
    pub glyph: String,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub glyph: String,
    /// Tailwind gradient classes for the card accent.
    pub color: String,
    pub category: String,
    pub projects: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub gradient: String,
    pub features: Vec<String>,
    /// Ordered (label, value) pairs.
    pub stats: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub short_name: String,
    pub greeting: String,
    pub intro_image: String,
    pub portrait: String,
    pub tagline: String,
    pub titles: Vec<String>,
    pub email: String,
    pub socials: Vec<Social>,
    pub stats: Vec<Stat>,
    pub about: Vec<String>,
    pub badges: Vec<String>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub keyframes: Keyframes,
    #[serde(default)]
    pub motion: MotionConfig,
}

pub fn parse(data: &[u8]) -> Result<Portfolio, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::ParseError(e.to_string()))
}

pub fn load(name: &str) -> Result<Portfolio, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    parse(&file.data)
}

/// The embedded portfolio, parsed once.
pub fn try_portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

/// The embedded portfolio, or an empty one if it failed to load. The page
/// still renders its chrome and animations with no content.
pub fn portfolio() -> &'static Portfolio {
    match try_portfolio() {
        Ok(p) => p,
        Err(e) => {
            log::error!("{e}");
            &EMPTY_PORTFOLIO
        }
    }
}

/// Year the site was built, taken from the `BUILD_TIME` stamp written by the
/// build script.
pub fn build_year() -> &'static str {
    let stamp = env!("BUILD_TIME");
    stamp.get(..4).unwrap_or(stamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::deck::Deck;
    use crate::motion::typing::{Cadence, TypeCycler};

    #[test]
    fn test_embedded_portfolio_loads() {
        let p = try_portfolio().expect("embedded portfolio should parse");
        assert_eq!(p.titles.len(), 4);
        assert_eq!(p.titles[0], "Full-Stack Developer");
        assert_eq!(p.skills.len(), 6);
        assert_eq!(p.projects.len(), 6);
        assert_eq!(p.stats.iter().map(|s| s.target).collect::<Vec<_>>(), vec![50, 5, 30, 1500]);
        assert_eq!(p.keyframes, Keyframes::default());
        assert_eq!(p.motion, MotionConfig::default());
    }

    #[test]
    fn test_embedded_portfolio_drives_motion() {
        let p = portfolio();
        assert!(Deck::new(p.projects.len()).is_ok());
        assert!(TypeCycler::new(p.titles.as_slice(), Cadence::from(&p.motion)).is_ok());
        assert!(p.skills.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load("nope.json").err(),
            Some(ContentError::NotFound("nope.json".to_string()))
        );
    }

    #[test]
    fn test_malformed_content() {
        assert!(matches!(parse(b"{ not json"), Err(ContentError::ParseError(_))));
        // keyframes out of order are rejected with the rest of the file
        let bad = br#"{
            "name": "", "short_name": "", "greeting": "", "intro_image": "", "portrait": "",
            "tagline": "", "titles": [], "email": "", "socials": [], "stats": [], "about": [],
            "badges": [], "skills": [], "projects": [],
            "keyframes": [
                {"position": 50, "from": [0,0,0], "via": [0,0,0], "to": [0,0,0]},
                {"position": 100, "from": [0,0,0], "via": [0,0,0], "to": [0,0,0]}
            ]
        }"#;
        assert!(matches!(parse(bad), Err(ContentError::ParseError(_))));
    }

    #[test]
    fn test_defaults_when_omitted() {
        let minimal = br#"{
            "name": "A", "short_name": "A", "greeting": "", "intro_image": "", "portrait": "",
            "tagline": "", "titles": ["x"], "email": "", "socials": [], "stats": [], "about": [],
            "badges": [], "skills": [], "projects": []
        }"#;
        let p = parse(minimal).expect("minimal content parses");
        assert_eq!(p.keyframes, Keyframes::default());
        assert_eq!(p.motion.pin_span, 2000.0);
    }

    #[test]
    fn test_build_year_is_four_digits() {
        let year = build_year();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }
}
