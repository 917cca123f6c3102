//! Skills page content: grouped skill pills and proficiency levels.

use super::ContentBlock;

/// Defines a titled group of skill pills.
///
pub type SkillGroup = ContentBlock;

/// Skill groups in display order.
///
pub static SKILL_GROUPS: [SkillGroup; 5] = [
    ContentBlock {
        title: "Programming Languages",
        body: "",
        items: &["Python", "PySpark", "Bash Script", "SQL"],
        tags: &[],
    },
    ContentBlock {
        title: "Databases",
        body: "",
        items: &["MySQL", "MsSQL Server"],
        tags: &[],
    },
    ContentBlock {
        title: "Cloud Platforms",
        body: "",
        items: &["Amazon Web Services (AWS)", "Microsoft Azure"],
        tags: &[],
    },
    ContentBlock {
        title: "Reporting & Visualization",
        body: "",
        items: &["PowerBI", "Plotly"],
        tags: &[],
    },
    ContentBlock {
        title: "Operating Systems",
        body: "",
        items: &["Windows", "Ubuntu", "Linux"],
        tags: &[],
    },
];

/// Defines a skill with a proficiency level on a 0 to 100 scale.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

impl Skill {
    /// Return the proportion of the proficiency bar to fill.
    ///
    pub fn fill_ratio(&self) -> f64 {
        fill_ratio(i64::from(self.level))
    }
}

pub static PROFICIENCY: [Skill; 6] = [
    Skill {
        name: "Python",
        level: 95,
    },
    Skill {
        name: "SQL",
        level: 90,
    },
    Skill {
        name: "PySpark",
        level: 80,
    },
    Skill {
        name: "Azure",
        level: 85,
    },
    Skill {
        name: "AWS",
        level: 75,
    },
    Skill {
        name: "PowerBI",
        level: 80,
    },
];

/// Map a proficiency level to a bar fill ratio, clamped to `[0, 1]`.
///
pub fn fill_ratio(level: i64) -> f64 {
    (level as f64 / 100.0).clamp(0.0, 1.0)
}
