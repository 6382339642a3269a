use crate::utils::colors::{BLUE, CYAN, GREEN, RED, RESET, YELLOW};

/// Recognised application statuses.
///
/// Only used as suggestions and for colouring: records store the status as
/// free text and any other value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Applied,
    Interview,
    TechAssessment,
    CaseStudy,
    Offer,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Applied,
        Status::Interview,
        Status::TechAssessment,
        Status::CaseStudy,
        Status::Offer,
        Status::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interview => "Interview",
            Status::TechAssessment => "Tech Assessment",
            Status::CaseStudy => "Case Study",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
        }
    }

    /// Case-insensitive lookup of a stored status label.
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Status::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s))
    }

    pub fn color(&self) -> &'static str {
        match self {
            Status::Applied => BLUE,
            Status::Interview => YELLOW,
            Status::TechAssessment | Status::CaseStudy => CYAN,
            Status::Offer => GREEN,
            Status::Rejected => RED,
        }
    }

    /// Colour for a free-text status (RESET when unknown).
    pub fn color_for(label: &str) -> &'static str {
        Status::from_label(label).map(|s| s.color()).unwrap_or(RESET)
    }
}
