//! Home page content: hero text, profile card, statistics, clients and
//! recent highlights.

use super::{ContentBlock, StatTile};

pub const HEADLINE: &str = "Data Engineer & Python Developer";

pub const EMPLOYER_LINE: &str = "HTC Global Services | Chennai, India";

pub const SUMMARY: &str = "Results-driven Data Engineer with 4+ years of experience in designing and \
implementing data solutions across cloud platforms. Specialized in Azure Data Factory, PySpark, \
and Python automation. Passionate about optimizing data workflows and ensuring data integrity.";

/// Profile card shown beside the hero text, as (heading, value) pairs.
///
pub static PROFILE_CARD: ContentBlock = ContentBlock {
    title: "Profile",
    body: "",
    items: &[],
    tags: &[
        ("Based in", "Chennai, India"),
        ("Experience", "4+ Years"),
        ("Current Role", "Data Engineer at HTC Global Services"),
    ],
};

/// Defines an outbound link handed to the hosting environment.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub target: &'static str,
}

pub static EMAIL_LINK: Link = Link {
    label: "Email Me",
    target: "mailto:shyamvimal98@gmail.com",
};

pub static PROFILE_LINK: Link = Link {
    label: "LinkedIn",
    target: "linkedin.com/in/shyam-kumar-g/",
};

pub static STATS: [StatTile; 4] = [
    StatTile {
        value: "4+",
        caption: "Years Experience",
    },
    StatTile {
        value: "15+",
        caption: "Projects Delivered",
    },
    StatTile {
        value: "5+",
        caption: "Clients Served",
    },
    StatTile {
        value: "3",
        caption: "Cloud Platforms",
    },
];

pub static CLIENT_BADGES: [&str; 4] = ["Silicon Labs", "TVS Motor", "Hyundai", "Internal Projects"];

/// Achievement cards, laid out as a left and a right column.
///
pub static HIGHLIGHTS: [[ContentBlock; 2]; 2] = [
    [
        ContentBlock::text(
            "Cost Optimization Initiative",
            "Extracted and analyzed Azure resources across 3 environments using Python, \
             eliminating unused objects and optimizing cloud costs",
        ),
        ContentBlock::text(
            "Automated QAT Process",
            "Developed Python script that streamlined Quality Assurance Testing, improving \
             efficiency by 40%",
        ),
    ],
    [
        ContentBlock::text(
            "Data Pipeline Optimization",
            "Created custom PySpark wrapper for MySQL, SFTP, and MongoDB connections, \
             optimizing data extraction",
        ),
        ContentBlock::text(
            "Real-time Dashboard Solution",
            "Built Flask-based API with Plotly visualizations for TVS Motor automotive data \
             processing",
        ),
    ],
];
