//! Input checks for catalog entries
//!
//! Applied where user input enters (the CLI), not inside the store: the store
//! accepts whatever it is given, including legacy data.

use url::Url;

/// Link validation error
#[derive(Debug, PartialEq, Eq)]
pub enum LinkValidationError {
    EmptyTitle,
    EmptyLink,
    UnsupportedScheme(String),
    DangerousScheme(String),
    InvalidFormat(String),
}

impl std::fmt::Display for LinkValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title cannot be empty"),
            Self::EmptyLink => write!(f, "Link cannot be empty"),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "Unsupported scheme: {}. Allowed: {}",
                scheme,
                PLAYABLE_SCHEMES.join(", ")
            ),
            Self::DangerousScheme(scheme) => write!(f, "Dangerous scheme blocked: {}", scheme),
            Self::InvalidFormat(msg) => write!(f, "Invalid link format: {}", msg),
        }
    }
}

impl std::error::Error for LinkValidationError {}

impl From<LinkValidationError> for crate::errors::ReelmarkError {
    fn from(err: LinkValidationError) -> Self {
        crate::errors::ReelmarkError::validation(err.to_string())
    }
}

/// Schemes a video player can open
const PLAYABLE_SCHEMES: &[&str] = &["http", "https", "rtmp", "rtsp"];

/// 危险协议列表
const DANGEROUS_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

pub fn validate_title(title: &str) -> Result<(), LinkValidationError> {
    if title.trim().is_empty() {
        return Err(LinkValidationError::EmptyTitle);
    }
    Ok(())
}

/// Check that `link` is an absolute URL a player can open.
pub fn validate_link(link: &str) -> Result<(), LinkValidationError> {
    let link = link.trim();

    if link.is_empty() {
        return Err(LinkValidationError::EmptyLink);
    }

    let url = Url::parse(link).map_err(|e| LinkValidationError::InvalidFormat(e.to_string()))?;
    let scheme = url.scheme();

    if DANGEROUS_SCHEMES.contains(&scheme) {
        return Err(LinkValidationError::DangerousScheme(format!("{}:", scheme)));
    }

    if !PLAYABLE_SCHEMES.contains(&scheme) {
        return Err(LinkValidationError::UnsupportedScheme(format!("{}:", scheme)));
    }

    Ok(())
}
