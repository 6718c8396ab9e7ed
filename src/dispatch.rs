//! 요청별 진입점인 디스패처를 제공하는 모듈입니다.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::Full;
use hyper::StatusCode;
use tracing::{debug, warn};

use crate::routing::{PathParams, Router};
use crate::{BoxError, Request, Response};

/// 디스패치 결과입니다.
///
/// 매칭 실패는 예외가 아니라 일급 반환값이며, 요청을 그대로 돌려주므로
/// 바깥 계층이 폴백(정적 파일, SPA 인덱스 등)을 시도할 수 있습니다.
pub enum DispatchOutcome {
    /// 라우트가 매칭되어 응답이 생성됨
    Matched(Response),
    /// 매칭되는 라우트 없음. 어떤 미들웨어도 실행되지 않았습니다.
    NotFound(Request),
}

/// 라우터 미스 이후에 시도되는 폴백 핸들러 트레이트입니다.
#[async_trait]
pub trait Fallback: Send + Sync {
    /// 요청을 처리할 수 있으면 응답을, 아니면 `None`을 반환합니다.
    async fn handle(&self, req: &Request) -> Option<Response>;
}

/// 요청별 진입점입니다.
///
/// 요청 처리 비용은 트라이 탐색 한 번과 합성 핸들러 호출 한 번이며,
/// 등록된 미들웨어 개수와 무관합니다. 미들웨어 실행은 모두 등록 시점에
/// 합성 핸들러에 구워져 있으므로 디스패처는 미들웨어를 직접 실행하지
/// 않습니다.
///
/// 디스패처는 라우팅 테이블을 변경하지 않으므로, 핸들러가 실패해도
/// 라우터가 일관성을 잃는 일은 없습니다.
pub struct Dispatcher {
    router: Router,
    fallbacks: Vec<Arc<dyn Fallback>>,
}

impl Dispatcher {
    /// 완성된 라우팅 테이블로 디스패처를 생성합니다.
    pub fn new(router: Router) -> Self {
        Dispatcher {
            router,
            fallbacks: Vec::new(),
        }
    }

    /// 라우터 미스 이후에 시도할 폴백을 추가합니다. 추가한 순서대로 시도됩니다.
    pub fn add_fallback<F: Fallback + 'static>(&mut self, fallback: F) {
        self.fallbacks.push(Arc::new(fallback));
    }

    /// 내부 라우팅 테이블에 대한 참조를 반환합니다.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// 요청을 매칭하고 합성 핸들러를 실행합니다.
    ///
    /// 매칭 시 추출된 파라미터를 요청 확장에 주입한 뒤 핸들러를 호출하고,
    /// 실패 시 요청을 담은 `NotFound`를 반환합니다. 핸들러와 미들웨어의
    /// `Err`는 잡지 않고 그대로 전파합니다.
    pub async fn handle(&self, mut req: Request) -> Result<DispatchOutcome, BoxError> {
        let key = lookup_key(&req);

        match self.router.lookup(&key) {
            Some((compiled, params)) => {
                debug!(key = %key, params = ?params, "라우트 매칭");
                let compiled = compiled.clone();
                req.extensions_mut().insert(PathParams(params));
                let response = compiled.invoke(req).await?;
                Ok(DispatchOutcome::Matched(response))
            }
            None => {
                warn!(key = %key, "매칭되는 라우트 없음");
                Ok(DispatchOutcome::NotFound(req))
            }
        }
    }

    /// 요청을 끝까지 처리해 항상 응답을 만들어 냅니다.
    ///
    /// 처리 순서는 라우터 미스 → 폴백 체인 → 기본 404입니다.
    pub async fn dispatch(&self, req: Request) -> Result<Response, BoxError> {
        match self.handle(req).await? {
            DispatchOutcome::Matched(response) => Ok(response),
            DispatchOutcome::NotFound(req) => {
                for fallback in &self.fallbacks {
                    if let Some(response) = fallback.handle(&req).await {
                        debug!(path = %req.uri().path(), "폴백 응답 사용");
                        return Ok(response);
                    }
                }
                Ok(not_found_response())
            }
        }
    }
}

/// 기본 404 응답을 생성합니다.
pub fn not_found_response() -> Response {
    hyper::Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Full::new(Bytes::from_static(b"Not Found")))
        .unwrap_or_else(|_| hyper::Response::new(Full::new(Bytes::from_static(b"Not Found"))))
}

// URL 전체를 파싱하지 않고 메서드와 경로만으로 조회 키를 만든다.
fn lookup_key(req: &Request) -> String {
    let method = req.method().as_str();
    let path = req.uri().path();

    let mut key = String::with_capacity(method.len() + 1 + path.len());
    key.push_str(method);
    key.push(':');
    key.push_str(path);
    key
}
