//! Timeline data types.

use serde::{Deserialize, Serialize};

/// What kind of period a timeline entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Paid employment
    Work,
    /// Studies or training
    Education,
    /// Side or personal project
    Project,
}

/// A contiguous, inclusive range of years annotated with role metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// Opaque identifier
    pub id: String,
    /// First year covered
    pub start_year: i32,
    /// Last year covered (inclusive)
    pub end_year: i32,
    /// Role title
    pub title: String,
    /// Company or institution
    pub organization: String,
    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,
    /// Kind of period
    pub category: Category,
    /// Technologies used, in display order
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Period {
    /// Whether `year` falls inside `[start_year, end_year]`.
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }
}

/// Fixed configuration for a timeline: the displayed year range and its periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// First year shown
    pub start_year: i32,
    /// Last year shown (inclusive)
    pub end_year: i32,
    /// Year selected before any interaction
    pub initial_year: i32,
    /// Periods in lookup order; overlap is allowed and the first match wins
    pub periods: Vec<Period>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            start_year: 2017,
            end_year: 2025,
            initial_year: 2020,
            periods: default_periods(),
        }
    }
}

fn period(
    id: &str,
    years: (i32, i32),
    title: &str,
    organization: &str,
    category: Category,
    technologies: &[&str],
) -> Period {
    Period {
        id: id.to_string(),
        start_year: years.0,
        end_year: years.1,
        title: title.to_string(),
        organization: organization.to_string(),
        description: String::new(),
        category,
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
    }
}

/// The built-in career history.
pub fn default_periods() -> Vec<Period> {
    vec![
        period(
            "1",
            (2017, 2017),
            "Internship",
            "Treelogic",
            Category::Work,
            &["HTML", "CSS", "JavaScript", "JAVA", "MySQL"],
        ),
        period(
            "2",
            (2018, 2020),
            "Fullstack Developer",
            "GooApps",
            Category::Education,
            &[
                "Symfony",
                "PHP",
                "React",
                "React Native",
                "CSS",
                "JavaScript",
                "Git",
                "Ionic",
            ],
        ),
        period(
            "3",
            (2020, 2025),
            "Fullstack Developer",
            "Okticket",
            Category::Work,
            &[
                "TypeScript",
                "Cordova",
                "REST APIs",
                "Laravel",
                "Aws",
                "MongoDB",
            ],
        ),
    ]
}
