use std::sync::Arc;

use aws_sdk_codepipeline::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::start_pipeline_execution::StartPipelineExecutionError,
    Client,
};

use super::dto::PipelineExecution;
use crate::utils::AppError;

/// CodePipeline 에러 코드를 세분화된 AppError로 변환
///
/// 서비스가 돌려준 메시지는 그대로 유지합니다.
fn classify_error_code(pipeline_name: &str, code: Option<&str>, message: String) -> AppError {
    match code {
        Some("PipelineNotFoundException") => AppError::pipeline_not_found(pipeline_name, message),
        Some(
            "AccessDeniedException"
            | "UnrecognizedClientException"
            | "InvalidClientTokenId"
            | "ExpiredTokenException"
            | "InvalidSignatureException",
        ) => AppError::PipelineAccessDenied(message),
        Some(
            "ThrottlingException"
            | "ConcurrentPipelineExecutionsLimitExceededException"
            | "LimitExceededException",
        ) => AppError::PipelineThrottled(message),
        Some(code) => AppError::pipeline_error(code, message),
        // 응답을 받기 전 실패 (네트워크, 자격 증명 로드 등)
        None => AppError::pipeline_error("Unknown", message),
    }
}

fn classify_codepipeline_error(
    pipeline_name: &str,
    error: SdkError<StartPipelineExecutionError>,
) -> AppError {
    // 모델링된 예외는 코드 메타데이터보다 타입으로 먼저 판단
    if let Some(StartPipelineExecutionError::PipelineNotFoundException(not_found)) =
        error.as_service_error()
    {
        let message = not_found
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| DisplayErrorContext(&error).to_string());
        return AppError::pipeline_not_found(pipeline_name, message);
    }

    let message = error
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(&error).to_string());

    classify_error_code(pipeline_name, error.code(), message)
}

/// 배포 파이프라인 클라이언트 인터페이스
///
/// CodePipeline 호출을 추상화하여 테스트에서 Mock 객체로 대체할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PipelineClientTrait: Send + Sync {
    /// 파이프라인 실행 시작
    async fn start_execution(&self, pipeline_name: &str) -> Result<PipelineExecution, AppError>;
}

/// Arc로 래핑된 PipelineClient (Clone 지원)
pub type PipelineClient = Arc<dyn PipelineClientTrait>;

/// AWS CodePipeline 클라이언트 구현체
#[derive(Clone, Debug)]
pub struct CodePipelineClient {
    client: Client,
}

impl CodePipelineClient {
    /// 공유 SDK 설정(리전, 자격 증명)으로 생성
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait::async_trait]
impl PipelineClientTrait for CodePipelineClient {
    async fn start_execution(&self, pipeline_name: &str) -> Result<PipelineExecution, AppError> {
        let output = self
            .client
            .start_pipeline_execution()
            .name(pipeline_name)
            .send()
            .await
            .map_err(|e| classify_codepipeline_error(pipeline_name, e))?;

        let execution_id = output
            .pipeline_execution_id()
            .ok_or_else(|| AppError::MissingExecutionId(pipeline_name.to_string()))?;

        Ok(PipelineExecution::new(pipeline_name, execution_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_codepipeline::operation::start_pipeline_execution::StartPipelineExecutionOutput;
    use aws_sdk_codepipeline::types::error::PipelineNotFoundException;
    use aws_smithy_mocks::{mock, mock_client};

    #[tokio::test]
    async fn should_start_execution_through_sdk() {
        let rule = mock!(Client::start_pipeline_execution)
            .match_requests(|req| req.name() == Some("Scaling_deployment"))
            .then_output(|| {
                StartPipelineExecutionOutput::builder()
                    .pipeline_execution_id("exec-123")
                    .build()
            });
        let client = CodePipelineClient {
            client: mock_client!(aws_sdk_codepipeline, [&rule]),
        };

        let execution = client.start_execution("Scaling_deployment").await.unwrap();

        assert_eq!(
            execution,
            PipelineExecution::new("Scaling_deployment", "exec-123")
        );
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn should_fail_when_response_has_no_execution_id() {
        let rule = mock!(Client::start_pipeline_execution)
            .then_output(|| StartPipelineExecutionOutput::builder().build());
        let client = CodePipelineClient {
            client: mock_client!(aws_sdk_codepipeline, [&rule]),
        };

        let result = client.start_execution("Scaling_deployment").await;

        assert!(matches!(
            result,
            Err(AppError::MissingExecutionId(ref pipeline)) if pipeline == "Scaling_deployment"
        ));
    }

    #[tokio::test]
    async fn should_map_pipeline_not_found_with_service_message() {
        let rule = mock!(Client::start_pipeline_execution).then_error(|| {
            StartPipelineExecutionError::PipelineNotFoundException(
                PipelineNotFoundException::builder()
                    .message("Account '111122223333' does not have a pipeline with name 'Scaling_deployment'")
                    .build(),
            )
        });
        let client = CodePipelineClient {
            client: mock_client!(aws_sdk_codepipeline, [&rule]),
        };

        let result = client.start_execution("Scaling_deployment").await;

        match result {
            Err(AppError::PipelineNotFound { pipeline, message }) => {
                assert_eq!(pipeline, "Scaling_deployment");
                assert_eq!(
                    message,
                    "Account '111122223333' does not have a pipeline with name 'Scaling_deployment'"
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(rule.num_calls(), 1);
    }

    #[test]
    fn should_classify_pipeline_not_found() {
        let error = classify_error_code(
            "Scaling_deployment",
            Some("PipelineNotFoundException"),
            "pipeline not found".to_string(),
        );

        assert!(matches!(
            error,
            AppError::PipelineNotFound { ref pipeline, ref message }
                if pipeline == "Scaling_deployment" && message == "pipeline not found"
        ));
    }

    #[test]
    fn should_classify_authorization_failures() {
        for code in ["AccessDeniedException", "UnrecognizedClientException", "ExpiredTokenException"] {
            let error = classify_error_code("p", Some(code), "denied".to_string());
            assert!(matches!(error, AppError::PipelineAccessDenied(_)), "code: {code}");
        }
    }

    #[test]
    fn should_classify_throttling() {
        for code in [
            "ThrottlingException",
            "ConcurrentPipelineExecutionsLimitExceededException",
        ] {
            let error = classify_error_code("p", Some(code), "slow down".to_string());
            assert!(matches!(error, AppError::PipelineThrottled(_)), "code: {code}");
        }
    }

    #[test]
    fn should_keep_unrecognized_code() {
        let error = classify_error_code("p", Some("ValidationException"), "bad".to_string());

        assert_eq!(error.to_string(), "CodePipeline error (ValidationException): bad");
    }

    #[test]
    fn should_mark_transport_failures_as_unknown() {
        let error = classify_error_code("p", None, "dispatch failure".to_string());

        assert!(matches!(
            error,
            AppError::PipelineError { ref code, .. } if code == "Unknown"
        ));
    }

    #[test]
    fn mock_should_return_configured_execution() {
        let mut mock = MockPipelineClientTrait::new();
        mock.expect_start_execution()
            .times(1)
            .returning(|name| Ok(PipelineExecution::new(name, "exec-1")));

        let execution =
            tokio_test::block_on(mock.start_execution("Scaling_deployment")).unwrap();

        assert_eq!(execution.pipeline_name, "Scaling_deployment");
        assert_eq!(execution.execution_id, "exec-1");
    }
}
