//! Build identity passed to components that report a version.

/// Version and author strings for user agents and audit records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub author: String,
}

impl BuildInfo {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            author: "SAS Institute Inc.".to_string(),
        }
    }

    /// Identity of this build, from the package version.
    pub fn current() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }

    /// HTTP user agent, e.g. `relic/1.2.3`.
    pub fn user_agent(&self) -> String {
        format!("relic/{}", self.version)
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::new("unknown")
    }
}
