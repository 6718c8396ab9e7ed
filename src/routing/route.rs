use std::fmt;
use std::sync::Arc;

use hyper::Method;

use crate::middleware::{Handler, Middleware};
use crate::routing::error::RoutingError;

/// 등록된 하나의 엔드포인트 정의입니다.
///
/// # 필드
///
/// * `method` - HTTP 메서드
/// * `path` - 정규화된 경로 패턴 (예: `/users/:id`)
/// * `param_names` - 경로에 등장하는 순서대로의 파라미터 이름
/// * `middlewares` - 등록 시점에 확정된 전체 미들웨어 체인 (바깥 스코프 우선)
/// * `handler` - 종단 핸들러
///
/// 합성 핸들러가 만들어진 이후에는 변경되지 않습니다.
#[derive(Clone)]
pub struct Route {
    pub method: Method,
    pub path: String,
    pub param_names: Vec<String>,
    pub middlewares: Vec<Arc<dyn Middleware>>,
    pub handler: Arc<dyn Handler>,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("param_names", &self.param_names)
            .field("middleware_count", &self.middlewares.len())
            .finish()
    }
}

/// 경로 문자열을 정규화합니다.
///
/// 앞에 `/`가 없으면 붙이고, 중복된 선행 `/`는 하나로 합치며,
/// 루트(`/`)를 제외한 경로 끝의 `/`는 제거합니다.
///
/// # 예제
///
/// ```
/// use web_framework_express::routing::normalize_path;
///
/// assert_eq!(normalize_path("users"), "/users");
/// assert_eq!(normalize_path("//users/"), "/users");
/// assert_eq!(normalize_path("/"), "/");
/// ```
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    let mut normalized = String::with_capacity(trimmed.len() + 1);
    normalized.push('/');
    normalized.push_str(trimmed.trim_end_matches('/'));
    normalized
}

/// 접두사와 경로를 결합한 뒤 `normalize_path`와 동일하게 정규화합니다.
///
/// 서브 라우터의 루트(`/`) 라우트는 접두사 자체가 됩니다.
pub fn join_paths(prefix: &str, path: &str) -> String {
    let prefix = normalize_path(prefix);
    let path = normalize_path(path);

    if path == "/" {
        return prefix;
    }
    if prefix == "/" {
        return path;
    }
    format!("{}{}", prefix, path)
}

/// 경로 패턴에서 파라미터 이름을 등장 순서대로 추출합니다.
///
/// # 반환
///
/// 이름 없는 파라미터 세그먼트(`:`)는 `RoutingError`로 실패합니다.
pub fn parse_param_names(path: &str) -> Result<Vec<String>, RoutingError> {
    let mut names = Vec::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if let Some(name) = segment.strip_prefix(':') {
            if name.is_empty() {
                return Err(RoutingError::InvalidPathPattern {
                    pattern: path.to_string(),
                    reason: "파라미터 이름이 비어 있습니다".to_string(),
                });
            }
            names.push(name.to_string());
        }
    }
    Ok(names)
}
