use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use scaling_dispatcher::{
    config::AppConfig, handle_alarm, utils::init_logging, CodePipelineClient, Dispatcher,
    PipelineClient,
};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 설정 로드 및 로깅 초기화
    let config = AppConfig::from_env()?;
    init_logging(config.log_format);

    // 3. CodePipeline 클라이언트 생성 (콜드 스타트 시 1회)
    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client: PipelineClient = Arc::new(CodePipelineClient::new(&sdk_config));
    let dispatcher = Dispatcher::from_config(client, &config);

    tracing::info!(
        pipeline_name = %dispatcher.pipeline_name(),
        "Alarm dispatcher ready"
    );

    // 4. Lambda 런타임 실행
    let dispatcher = &dispatcher;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_alarm(dispatcher, event).await
    }))
    .await
}
