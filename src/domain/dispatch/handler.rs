use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info_span, Instrument};

use super::dto::DispatchOutcome;
use super::service::Dispatcher;

/// CloudWatch 알람 Lambda 핸들러
///
/// 에러는 가공 없이 런타임으로 반환되어 호출 실패로 기록됩니다.
pub async fn handle_alarm(
    dispatcher: &Dispatcher,
    event: LambdaEvent<Value>,
) -> Result<DispatchOutcome, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("alarm_invocation", request_id = %context.request_id);

    let outcome = dispatcher.handle(payload).instrument(span).await?;

    Ok(outcome)
}
