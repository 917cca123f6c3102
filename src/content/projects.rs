//! Projects page content: employer banner and client project history.

pub const EMPLOYER: &str = "HTC Global Services, Chennai";

pub const ROLE_LINE: &str = "Data Engineer | July 2021 - Present";

/// Closed set of clients with a dedicated technology line.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Client {
    SiliconLabs,
    TvsMotor,
    Hyundai,
    Internal,
    /// Any client without a dedicated technology line.
    Other,
}

const DEFAULT_TECHNOLOGIES: &str = "PySpark, NiFi, Informatica, Python, XML";

impl Client {
    /// Resolve a display name to a client, falling back to `Client::Other`.
    ///
    pub fn from_name(name: &str) -> Client {
        match name {
            "Silicon Labs" => Client::SiliconLabs,
            "TVS Motor PVT Ltd" => Client::TvsMotor,
            "Hyundai - BlueLink Championship" => Client::Hyundai,
            "Internal Projects" => Client::Internal,
            _ => Client::Other,
        }
    }

    /// Return the technology line shown under the client's accomplishments.
    ///
    pub fn technologies(&self) -> &'static str {
        match self {
            Client::SiliconLabs => "Azure Data Factory, Python, JAMS, Azure DevOps",
            Client::TvsMotor => "Flask, Python, pyodbc, Plotly, REST APIs",
            Client::Hyundai => "AWS EC2, Hive, PySpark, SQL",
            Client::Internal | Client::Other => DEFAULT_TECHNOLOGIES,
        }
    }
}

/// Defines one collapsible client section.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientProjects {
    pub client: Client,
    pub name: &'static str,
    pub icon: &'static str,
    pub projects: &'static [&'static str],
}

pub static CLIENTS: [ClientProjects; 4] = [
    ClientProjects {
        client: Client::SiliconLabs,
        name: "Silicon Labs",
        icon: "◆",
        projects: &[
            "Developed and Triggered Stored Procedures in Azure Data Factory (ADF)",
            "Quality Assurance Testing - Validated data against test cases",
            "Production Support - Monitored JAMS jobs with automated Azure DevOps stories",
            "Automated QAT Process using Python script",
            "Cost Optimization - Analyzed Azure resources across environments using Python",
        ],
    },
    ClientProjects {
        client: Client::TvsMotor,
        name: "TVS Motor PVT Ltd",
        icon: "▲",
        projects: &[
            "Flask API Development for database requests with calculations",
            "Extracted automotive data using pyodbc library",
            "Data cleaning and preprocessing",
            "Plotly visualizations (line charts in PNG format)",
            "Automated PDF report distribution via API calls",
        ],
    },
    ClientProjects {
        client: Client::Hyundai,
        name: "Hyundai - BlueLink Championship",
        icon: "●",
        projects: &[
            "Data transfer from AWS EC2 to Hive using PySpark API calls",
            "Ensured data accuracy and integrity",
            "Ongoing client support for PySpark and SQL optimization",
            "Cross-functional collaboration for data integration strategies",
        ],
    },
    ClientProjects {
        client: Client::Internal,
        name: "Internal Projects",
        icon: "■",
        projects: &[
            "HTC Data Platform: Custom PySpark wrapper for MySQL, SFTP, MongoDB",
            "NiFi scheduling processor using Python",
            "Informatica Transformation Management: Extracted data from XML files",
            "Generated structured CSV files for Informatica transformations",
        ],
    },
];
