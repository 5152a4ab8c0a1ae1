//! Technology icons shown under a timeline period.
//!
//! Icons are looked up by the technology's display name through a table;
//! names without an entry fall back to [`Icon::Default`].

use indexmap::IndexMap;
use serde::Serialize;

/// Icon artwork known to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// HTML5 shield
    Html,
    /// CSS3 shield
    Css,
    /// JavaScript badge
    JavaScript,
    /// Java cup
    Java,
    /// MySQL dolphin
    MySql,
    /// Symfony mark
    Symfony,
    /// PHP elephant
    Php,
    /// React atom
    React,
    /// React Native atom
    ReactNative,
    /// Git branch mark
    Git,
    /// Ionic mark
    Ionic,
    /// TypeScript badge
    TypeScript,
    /// Cordova robot
    Cordova,
    /// Generic API mark
    RestApis,
    /// Laravel mark
    Laravel,
    /// AWS smile
    Aws,
    /// MongoDB leaf
    MongoDb,
    /// Fallback for anything unknown
    Default,
}

impl Icon {
    /// Asset name of the icon's SVG, e.g. `react-native`.
    pub fn asset_name(self) -> &'static str {
        match self {
            Icon::Html => "html",
            Icon::Css => "css",
            Icon::JavaScript => "javascript",
            Icon::Java => "java",
            Icon::MySql => "mysql",
            Icon::Symfony => "symfony",
            Icon::Php => "php",
            Icon::React => "react",
            Icon::ReactNative => "react-native",
            Icon::Git => "git",
            Icon::Ionic => "ionic",
            Icon::TypeScript => "typescript",
            Icon::Cordova => "cordova",
            Icon::RestApis => "rest-apis",
            Icon::Laravel => "laravel",
            Icon::Aws => "aws",
            Icon::MongoDb => "mongodb",
            Icon::Default => "default",
        }
    }
}

/// How many times the technology list repeats in the scrolling carousel.
pub const MARQUEE_REPEAT: usize = 3;

/// Lookup table from technology name to icon.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    icons: IndexMap<String, Icon>,
    fallback: Icon,
}

impl Default for IconRegistry {
    fn default() -> Self {
        let entries = [
            ("HTML", Icon::Html),
            ("CSS", Icon::Css),
            ("JavaScript", Icon::JavaScript),
            ("JAVA", Icon::Java),
            ("MySQL", Icon::MySql),
            ("Symfony", Icon::Symfony),
            ("PHP", Icon::Php),
            ("React", Icon::React),
            ("React Native", Icon::ReactNative),
            ("Git", Icon::Git),
            ("Ionic", Icon::Ionic),
            ("TypeScript", Icon::TypeScript),
            ("Cordova", Icon::Cordova),
            ("REST APIs", Icon::RestApis),
            ("Laravel", Icon::Laravel),
            ("Aws", Icon::Aws),
            ("MongoDB", Icon::MongoDb),
        ];

        Self {
            icons: entries
                .into_iter()
                .map(|(name, icon)| (name.to_string(), icon))
                .collect(),
            fallback: Icon::Default,
        }
    }
}

impl IconRegistry {
    /// Icon for `technology`; names are matched exactly.
    pub fn lookup(&self, technology: &str) -> Icon {
        self.icons.get(technology).copied().unwrap_or(self.fallback)
    }

    /// Register or replace an icon.
    pub fn insert(&mut self, technology: impl Into<String>, icon: Icon) {
        self.icons.insert(technology.into(), icon);
    }

    /// Whether `technology` has its own icon.
    pub fn contains(&self, technology: &str) -> bool {
        self.icons.contains_key(technology)
    }

    /// Known technology names in registration order.
    pub fn technologies(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// The carousel sequence: `technologies` repeated [`MARQUEE_REPEAT`]
    /// times, each paired with its icon.
    pub fn marquee<'a>(&self, technologies: &'a [String]) -> Vec<(&'a str, Icon)> {
        technologies
            .iter()
            .cycle()
            .take(technologies.len() * MARQUEE_REPEAT)
            .map(|t| (t.as_str(), self.lookup(t)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known() {
        let registry = IconRegistry::default();
        assert_eq!(registry.lookup("React Native"), Icon::ReactNative);
        assert_eq!(registry.lookup("REST APIs"), Icon::RestApis);
        assert_eq!(registry.lookup("Aws"), Icon::Aws);
    }

    #[test]
    fn test_lookup_falls_back() {
        let registry = IconRegistry::default();
        assert_eq!(registry.lookup("Haskell"), Icon::Default);
        // exact-match only
        assert_eq!(registry.lookup("react"), Icon::Default);
        assert!(!registry.contains("AWS"));
    }

    #[test]
    fn test_insert_overrides() {
        let mut registry = IconRegistry::default();
        registry.insert("Rust", Icon::Git);
        assert_eq!(registry.lookup("Rust"), Icon::Git);
    }

    #[test]
    fn test_every_period_technology_has_an_icon() {
        let registry = IconRegistry::default();
        for period in crate::timeline::default_periods() {
            for tech in &period.technologies {
                assert!(registry.contains(tech), "missing icon for {tech}");
            }
        }
    }

    #[test]
    fn test_marquee_repeats() {
        let registry = IconRegistry::default();
        let techs = vec!["Git".to_string(), "Elm".to_string()];
        let marquee = registry.marquee(&techs);

        assert_eq!(marquee.len(), 6);
        assert_eq!(marquee[0], ("Git", Icon::Git));
        assert_eq!(marquee[1], ("Elm", Icon::Default));
        assert_eq!(marquee[4], ("Git", Icon::Git));
        assert!(registry.marquee(&[]).is_empty());
    }

    #[test]
    fn test_asset_names() {
        assert_eq!(Icon::ReactNative.asset_name(), "react-native");
        assert_eq!(Icon::Default.asset_name(), "default");
    }
}
