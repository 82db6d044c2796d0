//! Lambda 알람 액션으로 전달되는 CloudWatch 알람 이벤트
//!
//! - 모든 필드가 선택적인 원본 이벤트 (`CloudWatchAlarmEvent`)
//! - 알람 상태 파싱
//! - 디스패처가 사용하는 검증된 `AlarmNotification`

mod event_types;

pub use event_types::{
    AlarmConfiguration, AlarmData, AlarmNotification, AlarmState, AlarmStateInfo,
    CloudWatchAlarmEvent,
};
