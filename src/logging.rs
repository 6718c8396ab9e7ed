//! `tracing` 서브스크라이버 초기화를 담당하는 모듈입니다.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::settings::{LogFormat, LogOutput, LogSettings};

/// 로깅 서브스크라이버를 초기화합니다.
///
/// 파일 출력을 사용하는 경우 반환된 가드를 프로세스가 끝날 때까지
/// 유지해야 버퍼링된 로그가 유실되지 않습니다.
///
/// # 인자
///
/// * `settings` - 레벨/형식/출력 대상 설정
pub fn init_logging(settings: &LogSettings) -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(settings.level.into());

    match &settings.output {
        LogOutput::Stdout => {
            let builder = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true);

            match settings.format {
                LogFormat::Json => builder.json().init(),
                LogFormat::Text => builder.init(),
            }
            None
        }
        LogOutput::File(path) => {
            let path = Path::new(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|f| f.to_os_string())
                .unwrap_or_else(|| "web_framework_express.log".into());

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file_name));

            let builder = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .with_ansi(false)
                .with_writer(writer);

            match settings.format {
                LogFormat::Json => builder.json().init(),
                LogFormat::Text => builder.init(),
            }
            Some(guard)
        }
    }
}
