/// 애플리케이션 전역 에러 타입
///
/// 어떤 에러도 여기서 복구하지 않습니다. 핸들러는 그대로 Lambda 런타임에 반환하고,
/// 재시도나 알림 정책은 호출 플랫폼이 결정합니다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 알람 이벤트에 필수 필드가 없음 (점 표기 경로)
    #[error("missing required field `{0}` in alarm notification")]
    MissingField(&'static str),

    /// 알람 이벤트 형태 자체가 맞지 않음 (객체가 아니거나 필드 타입 불일치)
    #[error("malformed alarm notification: {0}")]
    MalformedEvent(#[from] serde_json::Error),

    #[error("pipeline '{pipeline}' not found: {message}")]
    PipelineNotFound { pipeline: String, message: String },

    #[error("not authorized to start pipeline: {0}")]
    PipelineAccessDenied(String),

    #[error("pipeline start was throttled: {0}")]
    PipelineThrottled(String),

    #[error("CodePipeline error ({code}): {message}")]
    PipelineError { code: String, message: String },

    #[error("CodePipeline returned no execution id for pipeline '{0}'")]
    MissingExecutionId(String),
}

/// 편의 함수들
impl AppError {
    pub fn pipeline_not_found(pipeline: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::PipelineNotFound {
            pipeline: pipeline.into(),
            message: message.into(),
        }
    }

    pub fn pipeline_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::PipelineError {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_the_missing_field_path() {
        let error = AppError::MissingField("alarmData.state.value");

        assert_eq!(
            error.to_string(),
            "missing required field `alarmData.state.value` in alarm notification"
        );
    }

    #[test]
    fn should_keep_service_message_verbatim() {
        let error = AppError::pipeline_not_found(
            "Scaling_deployment",
            "Account '123' does not have a pipeline with name 'Scaling_deployment'",
        );

        assert_eq!(
            error.to_string(),
            "pipeline 'Scaling_deployment' not found: Account '123' does not have a pipeline with name 'Scaling_deployment'"
        );
    }

    #[test]
    fn should_convert_into_lambda_error() {
        let error: lambda_runtime::Error = AppError::PipelineThrottled("Rate exceeded".into()).into();

        assert_eq!(error.to_string(), "pipeline start was throttled: Rate exceeded");
    }
}
