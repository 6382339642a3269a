use crate::models::ApplicationRecord;

/// Optional list filters: company is a case-insensitive substring match,
/// status must match exactly. Blank values are ignored.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    pub company: Option<String>,
    pub status: Option<String>,
}

impl ApplicationFilter {
    pub fn new(company: Option<&str>, status: Option<&str>) -> Self {
        let clean = |s: Option<&str>| {
            s.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            company: clean(company),
            status: clean(status),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.company.is_none() && self.status.is_none()
    }

    pub fn matches(&self, rec: &ApplicationRecord) -> bool {
        if let Some(c) = &self.company
            && !rec.company.to_lowercase().contains(&c.to_lowercase())
        {
            return false;
        }

        if let Some(s) = &self.status
            && rec.status != *s
        {
            return false;
        }

        true
    }
}
