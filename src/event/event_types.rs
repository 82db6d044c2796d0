//! 알람 이벤트 구조체와 관련 타입

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::utils::AppError;

/// CloudWatch가 보고하는 알람 상태
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum AlarmState {
    /// 임계값 초과
    Alarm,
    /// 임계값 이내
    Ok,
    /// 판단할 데이터 부족
    InsufficientData,
    /// 그 밖의 값 (CloudWatch가 추가할 수 있는 상태)
    Other(String),
}

impl AlarmState {
    pub fn as_str(&self) -> &str {
        match self {
            AlarmState::Alarm => "ALARM",
            AlarmState::Ok => "OK",
            AlarmState::InsufficientData => "INSUFFICIENT_DATA",
            AlarmState::Other(value) => value,
        }
    }

    pub fn is_alarm(&self) -> bool {
        matches!(self, AlarmState::Alarm)
    }
}

impl FromStr for AlarmState {
    type Err = Infallible;

    /// 대소문자를 구분합니다. `"alarm"`은 ALARM 상태가 아닙니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ALARM" => AlarmState::Alarm,
            "OK" => AlarmState::Ok,
            "INSUFFICIENT_DATA" => AlarmState::InsufficientData,
            other => AlarmState::Other(other.to_string()),
        })
    }
}

impl From<String> for AlarmState {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(state) => state,
            Err(never) => match never {},
        }
    }
}

impl From<AlarmState> for String {
    fn from(state: AlarmState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for AlarmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 알람 상태 블록 (`alarmData.state` / `alarmData.previousState`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmStateInfo {
    pub value: Option<String>,
    pub reason: Option<String>,
    pub timestamp: Option<String>,
}

/// 알람 설정 블록 (로그에 남길 부분만)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmConfiguration {
    pub description: Option<String>,
}

/// `alarmData` 블록
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmData {
    pub alarm_name: Option<String>,
    pub state: Option<AlarmStateInfo>,
    pub previous_state: Option<AlarmStateInfo>,
    pub configuration: Option<AlarmConfiguration>,
}

/// CloudWatch가 Lambda 알람 액션으로 보내는 이벤트
///
/// 전송 형식에서는 모든 필드가 선택적입니다. 필수 필드는
/// [`AlarmNotification::try_from`]에서 확인하며, 누락된 필드의 경로를 에러에 담습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudWatchAlarmEvent {
    pub source: Option<String>,
    pub alarm_arn: Option<String>,
    pub account_id: Option<String>,
    pub time: Option<String>,
    pub region: Option<String>,
    pub alarm_data: Option<AlarmData>,
}

/// 검증된 알람 알림 (호출당 1건)
///
/// 필수 필드는 `alarm_name`과 `state`뿐입니다. 나머지는 로그 span에 남기는 참고 정보입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmNotification {
    pub alarm_name: String,
    pub state: AlarmState,
    pub previous_state: Option<AlarmState>,
    pub reason: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub alarm_arn: Option<String>,
    pub account_id: Option<String>,
    pub time: Option<String>,
    pub region: Option<String>,
}

impl AlarmNotification {
    /// 필수 필드 두 개만으로 생성
    pub fn new(alarm_name: impl Into<String>, state: AlarmState) -> Self {
        Self {
            alarm_name: alarm_name.into(),
            state,
            previous_state: None,
            reason: None,
            description: None,
            source: None,
            alarm_arn: None,
            account_id: None,
            time: None,
            region: None,
        }
    }

    /// Lambda 원본 페이로드 파싱
    ///
    /// 형태가 맞지 않는 페이로드(객체가 아니거나 필드 타입이 다름)는
    /// serde 에러를 담은 `AppError::MalformedEvent`가 됩니다.
    pub fn from_value(payload: serde_json::Value) -> Result<Self, AppError> {
        let event: CloudWatchAlarmEvent = serde_json::from_value(payload)?;
        Self::try_from(event)
    }

    pub fn is_alarm(&self) -> bool {
        self.state.is_alarm()
    }
}

impl TryFrom<CloudWatchAlarmEvent> for AlarmNotification {
    type Error = AppError;

    fn try_from(event: CloudWatchAlarmEvent) -> Result<Self, Self::Error> {
        let data = event
            .alarm_data
            .ok_or(AppError::MissingField("alarmData"))?;

        let alarm_name = data
            .alarm_name
            .ok_or(AppError::MissingField("alarmData.alarmName"))?;

        let state = data
            .state
            .ok_or(AppError::MissingField("alarmData.state"))?;

        let value = state
            .value
            .ok_or(AppError::MissingField("alarmData.state.value"))?;

        Ok(Self {
            alarm_name,
            state: AlarmState::from(value),
            previous_state: data
                .previous_state
                .and_then(|previous| previous.value)
                .map(AlarmState::from),
            reason: state.reason,
            description: data.configuration.and_then(|c| c.description),
            source: event.source,
            alarm_arn: event.alarm_arn,
            account_id: event.account_id,
            time: event.time,
            region: event.region,
        })
    }
}
