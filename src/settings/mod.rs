//! 환경 변수와 TOML 파일 기반의 프레임워크 설정 모듈입니다.

use serde::Deserialize;
use std::{env, fs, path::Path};

mod error;
pub mod logging;
mod server;

pub use error::SettingsError;
pub use logging::{LogFormat, LogOutput, LogSettings};
pub use server::{parse_env_var, ServerSettings};

pub type Result<T> = std::result::Result<T, SettingsError>;

/// 프레임워크 전역 설정입니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// 서버 설정
    #[serde(default)]
    pub server: ServerSettings,

    /// 로깅 설정
    #[serde(default)]
    pub logging: LogSettings,
}

impl Settings {
    /// 설정을 로드합니다.
    ///
    /// `WEB_CONFIG_FILE`이 지정되어 있으면 해당 TOML 파일을,
    /// 아니면 환경 변수(`WEB_*`)를 사용합니다.
    pub fn load() -> Result<Self> {
        if let Ok(config_path) = env::var("WEB_CONFIG_FILE") {
            Self::from_toml_file(&config_path)
        } else {
            Self::from_env()
        }
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|e| SettingsError::FileError {
            path: path.as_ref().to_string_lossy().to_string(),
            error: e,
        })?;

        let settings: Self =
            toml::from_str(&content).map_err(|e| SettingsError::ParseError { source: e })?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_env() -> Result<Self> {
        let settings = Self {
            server: ServerSettings::from_env()?,
            logging: LogSettings::from_env()?,
        };

        // 설정 생성 시점에 바로 검증
        settings.validate()?;
        Ok(settings)
    }

    /// 설정 유효성 검증
    pub fn validate(&self) -> Result<()> {
        self.server.validate()
    }
}
