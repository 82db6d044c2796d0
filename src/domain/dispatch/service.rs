use serde_json::Value;
use tracing::{error, info, instrument, warn};

use super::dto::DispatchOutcome;
use crate::config::AppConfig;
use crate::domain::pipeline::PipelineClient;
use crate::event::{AlarmNotification, AlarmState};
use crate::utils::AppError;

/// 알람 디스패처
///
/// ALARM 상태의 알람에 대해서만 설정된 파이프라인을 한 번 실행합니다.
/// 재시도, 중복 제거, 상태 저장은 하지 않으며 호출 간에 공유되는 가변 상태가 없습니다.
#[derive(Clone)]
pub struct Dispatcher {
    client: PipelineClient,
    pipeline_name: String,
}

impl Dispatcher {
    pub fn new(client: PipelineClient, pipeline_name: impl Into<String>) -> Self {
        Self {
            client,
            pipeline_name: pipeline_name.into(),
        }
    }

    pub fn from_config(client: PipelineClient, config: &AppConfig) -> Self {
        Self::new(client, config.pipeline_name.clone())
    }

    pub fn pipeline_name(&self) -> &str {
        &self.pipeline_name
    }

    /// 원본 Lambda 페이로드를 파싱한 뒤 처리
    pub async fn handle(&self, payload: Value) -> Result<DispatchOutcome, AppError> {
        let notification = AlarmNotification::from_value(payload).inspect_err(|e| {
            warn!(error = %e, "Rejecting malformed alarm notification");
        })?;

        self.dispatch(&notification).await
    }

    /// 알람 상태에 따라 파이프라인 실행 여부 결정
    #[instrument(
        skip_all,
        fields(
            alarm_name = %notification.alarm_name,
            state = %notification.state,
            previous_state = notification.previous_state.as_ref().map(AlarmState::as_str),
            description = notification.description.as_deref(),
            source = notification.source.as_deref(),
            alarm_arn = notification.alarm_arn.as_deref(),
            account_id = notification.account_id.as_deref(),
            time = notification.time.as_deref(),
            region = notification.region.as_deref(),
        )
    )]
    pub async fn dispatch(
        &self,
        notification: &AlarmNotification,
    ) -> Result<DispatchOutcome, AppError> {
        if !notification.is_alarm() {
            let outcome = DispatchOutcome::Ignored {
                alarm_name: notification.alarm_name.clone(),
                state: notification.state.clone(),
            };
            info!("{}", outcome);
            return Ok(outcome);
        }

        if let Some(reason) = &notification.reason {
            info!(reason = %reason, "Alarm is in ALARM state");
        }

        let execution = self
            .client
            .start_execution(&self.pipeline_name)
            .await
            .inspect_err(|e| {
                error!(
                    pipeline_name = %self.pipeline_name,
                    error = %e,
                    "Failed to start pipeline execution"
                );
            })?;

        let outcome = DispatchOutcome::Triggered {
            alarm_name: notification.alarm_name.clone(),
            pipeline_name: execution.pipeline_name,
            execution_id: execution.execution_id,
        };
        info!("{}", outcome);

        Ok(outcome)
    }
}
