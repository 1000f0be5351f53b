use std::path::PathBuf;

/// Parameters exactly as the caller supplied them.
///
/// Nothing in here is trusted. The policy gate turns a `Request` into an
/// authorized action or rejects it; no other code reads these fields.
#[derive(Clone, Debug, Default)]
pub struct Request {
    pub action: String,
    pub service: Option<String>,
    pub domain: Option<String>,
    /// Falls back to [`crate::model::ip::LOOPBACK`] when absent.
    pub ip: Option<String>,
    pub hosts_path: Option<PathBuf>,
    pub hosts_marker: Option<String>,
    pub tool_path: Option<PathBuf>,
}

impl Request {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }
}
