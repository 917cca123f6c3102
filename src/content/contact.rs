//! Contact page and footer content.

use super::ContentBlock;

pub static CONTACT_INFO: ContentBlock = ContentBlock {
    title: "Contact Information",
    body: "",
    items: &[],
    tags: &[
        ("Location", "Chennai, India"),
        ("Email", "shyamvimal98@gmail.com"),
        ("Phone", "+91 8667597068"),
        ("LinkedIn", "linkedin.com/in/shyam-kumar-g/"),
    ],
};

pub static CURRENT_ROLE: ContentBlock = ContentBlock {
    title: "Current Role",
    body: "Data Engineer at HTC Global Services",
    items: &["July 2021 - Present"],
    tags: &[],
};

pub static AVAILABILITY: ContentBlock = ContentBlock {
    title: "Availability",
    body: "",
    items: &[
        "Open for opportunities and collaboration",
        "Working hours: IST (9 AM - 6 PM)",
    ],
    tags: &[],
};

pub const SENT_MESSAGE: &str =
    "Message sent successfully! I'll get back to you within 24 hours.";

pub const COPYRIGHT_LINE: &str = "© 2026 Data Engineer Portfolio | Built with Ratatui";

pub const FOOTER_CONTACT_LINE: &str = "Chennai, India | shyamvimal98@gmail.com";
