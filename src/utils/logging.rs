//! 로깅 초기화 모듈
//!
//! Lambda 실행 환경에서는 stdout이 그대로 CloudWatch Logs로 전달됩니다.

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{
        self,
        format::{DefaultFields, Writer},
        FmtContext, FormatEvent, FormatFields, MakeWriter,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LogFormat;

/// 기본 로그 필터
const DEFAULT_FILTER: &str = "info,scaling_dispatcher=debug";

/// 평문 이벤트 포맷
///
/// INFO 이벤트는 메시지(와 추가 필드)만 한 줄로 출력합니다. 레벨, 타겟, span 정보는 붙이지 않습니다.
/// 그 외 레벨은 `WARN ...`처럼 레벨만 앞에 붙습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageOnly;

impl<S, N> FormatEvent<S, N> for MessageOnly
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = *event.metadata().level();
        if level != Level::INFO {
            write!(writer, "{} ", level)?;
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// `LogFormat::Text`용 fmt 레이어
pub fn text_layer<S, W>(make_writer: W) -> fmt::Layer<S, DefaultFields, MessageOnly, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fmt::layer()
        .with_ansi(false)
        .with_writer(make_writer)
        .event_format(MessageOnly)
}

/// 로깅 시스템을 초기화합니다.
///
/// `RUST_LOG` 환경 변수로 로그 레벨을 설정할 수 있습니다.
///
/// - `LogFormat::Text`: 메시지만 출력하는 평문. CloudWatch Logs가 수신 시각을 붙입니다.
/// - `LogFormat::Json`: RFC 3339 UTC 타임스탬프와 현재 span을 포함한 JSON.
///
/// 이미 초기화된 경우(테스트 등)에는 조용히 무시합니다.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(text_layer(std::io::stdout))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_timer(fmt::time::UtcTime::rfc_3339())
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .try_init(),
    };

    if let Err(err) = result {
        // Detect "already initialized" via source downcasting
        use std::error::Error;
        if err
            .source()
            .and_then(|s| s.downcast_ref::<tracing::dispatcher::SetGlobalDefaultError>())
            .is_none()
        {
            eprintln!("Failed to initialize tracing: {}", err);
        }
    }
}

/// 테스트에서 로그 출력을 모으는 버퍼
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl CapturedLogs {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
