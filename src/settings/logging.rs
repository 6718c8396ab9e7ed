use serde::{Deserialize, Deserializer};
use tracing::Level;

use super::error::SettingsError;
use super::server::parse_env_var;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Text
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogOutput {
    Stdout,
    File(String),
}

impl Default for LogOutput {
    fn default() -> Self {
        LogOutput::Stdout
    }
}

impl std::str::FromStr for LogOutput {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(LogOutput::Stdout),
            path => Ok(LogOutput::File(path.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for LogOutput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(LogOutput::Stdout))
    }
}

/// 로깅 설정입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// 로그 레벨 (기본값: info)
    #[serde(default = "default_log_level", deserialize_with = "deserialize_level")]
    pub level: Level,

    /// 출력 형식 (text 또는 json)
    #[serde(default)]
    pub format: LogFormat,

    /// 출력 대상 ("stdout" 또는 파일 경로)
    #[serde(default)]
    pub output: LogOutput,
}

fn default_log_level() -> Level {
    Level::INFO
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

impl LogSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            level: parse_env_var("WEB_LOG_LEVEL", default_log_level)?,
            format: parse_env_var("WEB_LOG_FORMAT", LogFormat::default)?,
            output: parse_env_var("WEB_LOG_OUTPUT", LogOutput::default)?,
        })
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            output: LogOutput::default(),
        }
    }
}
