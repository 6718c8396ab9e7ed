use serde::Deserialize;
use std::env;

use super::error::SettingsError;

#[derive(Clone, Debug, Deserialize)]
pub struct ServerSettings {
    /// 바인드 주소 (기본값: 0.0.0.0)
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP 포트 (기본값: 8080)
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8080
}

/// 환경 변수를 파싱하고, 없으면 기본값을 사용합니다.
pub fn parse_env_var<T: std::str::FromStr, F: FnOnce() -> T>(
    name: &str,
    default: F,
) -> Result<T, SettingsError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val.parse().map_err(|e: T::Err| SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: val,
            reason: e.to_string(),
        }),
        Err(env::VarError::NotPresent) => Ok(default()),
        Err(e) => Err(SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: "".to_string(),
            reason: e.to_string(),
        }),
    }
}

impl ServerSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let settings = Self {
            bind_address: env::var("WEB_BIND_ADDRESS").unwrap_or_else(|_| default_bind_address()),
            http_port: parse_env_var("WEB_HTTP_PORT", default_http_port)?,
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.http_port == 0 {
            return Err(SettingsError::EnvVarInvalid {
                var_name: "WEB_HTTP_PORT".to_string(),
                value: self.http_port.to_string(),
                reason: "포트는 0이 될 수 없습니다".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            http_port: default_http_port(),
        }
    }
}
