use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReelmarkError {
    Parse(String),
    Persistence(String),
    NotFound(String),
    Validation(String),
    Config(String),
}

impl ReelmarkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ReelmarkError::Parse(_) => "E001",
            ReelmarkError::Persistence(_) => "E002",
            ReelmarkError::NotFound(_) => "E003",
            ReelmarkError::Validation(_) => "E004",
            ReelmarkError::Config(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ReelmarkError::Parse(_) => "Parse Error",
            ReelmarkError::Persistence(_) => "Persistence Error",
            ReelmarkError::NotFound(_) => "Record Not Found",
            ReelmarkError::Validation(_) => "Validation Error",
            ReelmarkError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ReelmarkError::Parse(msg)
            | ReelmarkError::Persistence(msg)
            | ReelmarkError::NotFound(msg)
            | ReelmarkError::Validation(msg)
            | ReelmarkError::Config(msg) => msg,
        }
    }

    /// Colored multi-part output for terminals
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ReelmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ReelmarkError {}

// 便捷的构造函数
impl ReelmarkError {
    pub fn parse<T: Into<String>>(msg: T) -> Self {
        ReelmarkError::Parse(msg.into())
    }

    pub fn persistence<T: Into<String>>(msg: T) -> Self {
        ReelmarkError::Persistence(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ReelmarkError::NotFound(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ReelmarkError::Validation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ReelmarkError::Config(msg.into())
    }
}

impl From<std::io::Error> for ReelmarkError {
    fn from(err: std::io::Error) -> Self {
        ReelmarkError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for ReelmarkError {
    fn from(err: serde_json::Error) -> Self {
        ReelmarkError::Parse(err.to_string())
    }
}

impl From<config::ConfigError> for ReelmarkError {
    fn from(err: config::ConfigError) -> Self {
        ReelmarkError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ReelmarkError {
    fn from(err: toml::ser::Error) -> Self {
        ReelmarkError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReelmarkError>;
