use std::env;
use std::str::FromStr;

/// 기본 배포 파이프라인 이름
pub const DEFAULT_PIPELINE_NAME: &str = "Scaling_deployment";

/// 로그 출력 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 타임스탬프 없는 평문 (CloudWatch Logs가 타임스탬프를 붙임)
    #[default]
    Text,
    /// 구조화된 JSON
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// ALARM 상태일 때 실행할 CodePipeline 이름
    pub pipeline_name: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pipeline_name: DEFAULT_PIPELINE_NAME.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정 로드 (테스트에서 환경 변수 대신 사용)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pipeline_name = match lookup("PIPELINE_NAME") {
            Some(name) if name.trim().is_empty() => return Err(ConfigError::EmptyPipelineName),
            Some(name) => name.trim().to_string(),
            None => DEFAULT_PIPELINE_NAME.to_string(),
        };

        let log_format = lookup("LOG_FORMAT")
            .map(|value| value.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            pipeline_name,
            log_format,
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PIPELINE_NAME must not be empty")]
    EmptyPipelineName,
    #[error("Invalid log format '{0}': expected 'text' or 'json'")]
    InvalidLogFormat(String),
}
