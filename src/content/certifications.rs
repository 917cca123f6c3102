//! Certifications page content.

use super::ContentBlock;

pub static HIGHLIGHT: ContentBlock = ContentBlock {
    title: "Databricks Data Engineer Associate",
    body: "",
    items: &[],
    tags: &[
        ("Issued by", "Databricks"),
        (
            "Skills validated",
            "Spark, Data Engineering, ETL, Performance Tuning",
        ),
        ("Status", "Active"),
    ],
};

pub static LEARNING_PATH: ContentBlock = ContentBlock {
    title: "Learning Path",
    body: "Currently preparing for:",
    items: &[
        "Azure Data Engineer Associate (DP-203)",
        "AWS Certified Data Analytics",
    ],
    tags: &[],
};

/// Defines a dated entry on the certification timeline.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub year: u16,
    pub name: &'static str,
    pub status: &'static str,
}

/// Timeline entries in chronological order.
///
pub static TIMELINE: [Milestone; 3] = [
    Milestone {
        year: 2023,
        name: "Databricks Data Engineer Associate",
        status: "Completed",
    },
    Milestone {
        year: 2024,
        name: "Azure Data Engineer Associate",
        status: "In Progress",
    },
    Milestone {
        year: 2024,
        name: "AWS Data Analytics Specialty",
        status: "Planned",
    },
];
