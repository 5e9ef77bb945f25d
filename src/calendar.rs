use url::Url;

/// One calendar visible to the current workspace, as returned by the
/// calendar list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Calendar {
    pub calendar_url: Url,
    pub calendar_type: CalendarType,
    pub with_credentials: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    Private,
    Shared,
}

impl Calendar {
    pub const fn is_private(&self) -> bool {
        matches!(self.calendar_type, CalendarType::Private)
    }
}

/// Body shape of a 4xx answer from the calendar list endpoint.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct ErrorBody {
    pub code: i64,
}
