use serde::Serialize;
use std::fmt;

use crate::event::AlarmState;

/// 알람 한 건을 처리한 결과
///
/// `Display`는 처리 결과 로그 한 줄과 동일하고, 직렬화 결과는 Lambda 응답으로 반환됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "outcome",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum DispatchOutcome {
    /// ALARM 상태: 파이프라인 실행을 시작함
    Triggered {
        alarm_name: String,
        pipeline_name: String,
        execution_id: String,
    },
    /// ALARM 이외의 상태: 아무것도 하지 않음
    Ignored {
        alarm_name: String,
        state: AlarmState,
    },
}

impl DispatchOutcome {
    pub fn is_triggered(&self) -> bool {
        matches!(self, DispatchOutcome::Triggered { .. })
    }

    pub fn execution_id(&self) -> Option<&str> {
        match self {
            DispatchOutcome::Triggered { execution_id, .. } => Some(execution_id),
            DispatchOutcome::Ignored { .. } => None,
        }
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchOutcome::Triggered {
                pipeline_name,
                execution_id,
                ..
            } => write!(
                f,
                "Triggered CodePipeline execution for {}. Execution ID: {}",
                pipeline_name, execution_id
            ),
            DispatchOutcome::Ignored { alarm_name, .. } => write!(
                f,
                "Ignoring CloudWatch alarm '{}' because it's not in ALARM state.",
                alarm_name
            ),
        }
    }
}
