use std::future::Future;

use async_trait::async_trait;

use crate::middleware::chain::Next;
use crate::{BoxError, Request, Response};

/// 종단 핸들러 트레이트
///
/// 요청을 받아 응답을 생성하는 인터페이스를 정의합니다.
/// `Fn(Request) -> Future` 형태의 비동기 함수와 클로저에 대해
/// 자동으로 구현됩니다.
#[async_trait]
pub trait Handler: Send + Sync {
    /// HTTP 요청을 처리하고 응답을 생성합니다.
    async fn call(&self, req: Request) -> Result<Response, BoxError>;
}

#[async_trait]
impl<F, Fut> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Response, BoxError>> + Send + 'static,
{
    async fn call(&self, req: Request) -> Result<Response, BoxError> {
        (self)(req).await
    }
}

/// 미들웨어 트레이트
///
/// 핸들러 앞뒤에서 요청과 응답을 가공할 수 있는 인터페이스를 정의합니다.
/// `next.run(req)` 호출 이전 로직은 핸들러보다 먼저, 이후 로직은
/// 안쪽 체인의 응답이 완전히 확정된 뒤에 실행됩니다.
/// `next`를 호출하지 않으면 이후 미들웨어와 핸들러는 실행되지 않습니다.
#[async_trait]
pub trait Middleware: Send + Sync {
    /// 요청을 처리하고, 필요하면 `next`로 나머지 체인을 실행합니다.
    async fn handle(&self, req: Request, next: Next) -> Result<Response, BoxError>;
}

#[async_trait]
impl<F, Fut> Middleware for F
where
    F: Fn(Request, Next) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Response, BoxError>> + Send + 'static,
{
    async fn handle(&self, req: Request, next: Next) -> Result<Response, BoxError> {
        (self)(req, next).await
    }
}
