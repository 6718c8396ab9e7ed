use std::fmt;

/// 라우트 등록 관련 에러를 표현하는 열거형입니다.
///
/// 라우트는 한번 등록되면 변경되지 않으므로, 잘못된 패턴은
/// 요청 시점이 아니라 등록 시점에 즉시 실패해야 합니다.
#[derive(Debug, PartialEq)]
pub enum RoutingError {
    /// "METHOD:/경로" 형식이 아닌 라우트 키
    InvalidRouteKey {
        key: String,
        reason: String,
    },
    /// 잘못된 경로 패턴
    InvalidPathPattern {
        pattern: String,
        reason: String,
    },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::InvalidRouteKey { key, reason } =>
                write!(f, "유효하지 않은 라우트 키 {}: {}", key, reason),
            RoutingError::InvalidPathPattern { pattern, reason } =>
                write!(f, "잘못된 경로 패턴: {} ({})", pattern, reason),
        }
    }
}

impl std::error::Error for RoutingError {}
