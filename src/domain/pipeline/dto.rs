use serde::Serialize;

/// 새로 시작된 파이프라인 실행
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineExecution {
    /// 실행된 파이프라인 이름
    pub pipeline_name: String,

    /// CodePipeline이 발급한 실행 ID
    pub execution_id: String,
}

impl PipelineExecution {
    pub fn new(pipeline_name: impl Into<String>, execution_id: impl Into<String>) -> Self {
        Self {
            pipeline_name: pipeline_name.into(),
            execution_id: execution_id.into(),
        }
    }
}
