//! Portfolio content module.
//!
//! All text shown by the application lives here as `static` tables. Nothing in
//! this module is ever mutated at runtime; the page renderers only read it.

pub mod certifications;
pub mod contact;
pub mod profile;
pub mod projects;
pub mod skills;

pub use certifications::Milestone;
pub use projects::{Client, ClientProjects};
pub use skills::{fill_ratio, Skill, SkillGroup};

/// Defines an immutable unit of portfolio content.
///
/// The same shape is used for achievement cards, client entries, skill
/// groups and the certification highlight. `items` and `tags` are empty
/// when a block has no sub-items or key-value pairs.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentBlock {
    pub title: &'static str,
    pub body: &'static str,
    pub items: &'static [&'static str],
    pub tags: &'static [(&'static str, &'static str)],
}

impl ContentBlock {
    /// Return a block holding only a title and body text.
    ///
    pub const fn text(title: &'static str, body: &'static str) -> Self {
        ContentBlock {
            title,
            body,
            items: &[],
            tags: &[],
        }
    }

    /// Return the value of the tag with the given key.
    ///
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }
}

/// Defines a statistic tile (headline value and caption).
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTile {
    pub value: &'static str,
    pub caption: &'static str,
}
