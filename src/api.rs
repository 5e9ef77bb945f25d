use ureq::Agent;
use url::Url;

/// An HTTP answer from the workspace API. Non-2xx statuses are carried as
/// data so callers can branch on them; only transport and decode problems
/// surface as [`Error`].
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Thin client for the workspace REST API.
#[derive(Debug, Clone)]
pub struct Client {
    agent: Agent,
    api_url: Url,
}

impl Client {
    pub fn new(api_url: Url) -> Self {
        Self {
            agent: Agent::new(),
            api_url,
        }
    }

    /// Fetch the list of calendars visible to the given workspace.
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent or the response body
    /// is not valid JSON.
    pub fn calendar_list(&self, workspace_id: u32) -> Result<Response, Error> {
        let url = self.endpoint(&format!("workspaces/{workspace_id}/calendars"))?;

        let response = match self
            .agent
            .get(url.as_str())
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            // 4xx/5xx answers still carry a body the caller branches on
            Err(ureq::Error::Status(_, response)) => response,
            Err(error @ ureq::Error::Transport(_)) => return Err(error.into()),
        };

        let status = response.status();
        let content = response.into_string().map_err(|e| Error {
            kind: ErrorKind::Parsing,
            message: e.to_string(),
        })?;

        let body = if content.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&content)?
        };

        Ok(Response { status, body })
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        let base = self.api_url.as_str().trim_end_matches('/');

        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}

/// Errors that may occur while talking to the workspace API.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    Http,
    Parsing,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        Self {
            kind: ErrorKind::Http,
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::Parsing,
            message: e.to_string(),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self {
            kind: ErrorKind::Parsing,
            message: e.to_string(),
        }
    }
}
