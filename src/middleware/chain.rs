use std::sync::Arc;

use crate::middleware::traits::{Handler, Middleware};
use crate::{BoxError, Request, Response};

/// 체인의 나머지 구간을 실행하는 컨티뉴에이션입니다.
///
/// 합성 핸들러 호출마다 새로 만들어져 해당 요청에서만 사용되며,
/// 요청 간에 공유되는 상태를 담지 않습니다. 호출하지 않고 버리면
/// 이후 미들웨어와 핸들러는 실행되지 않습니다 (단락).
pub enum Next {
    /// 종단 핸들러만 남은 경우. 인덱스 관리 없이 바로 호출합니다.
    Terminal(Arc<dyn Handler>),
    /// 남은 미들웨어 배열을 인덱스로 전진하며 실행합니다.
    Chain {
        middlewares: Arc<[Arc<dyn Middleware>]>,
        handler: Arc<dyn Handler>,
        index: usize,
    },
}

impl Next {
    /// 체인의 다음 단계를 실행하고 그 응답을 반환합니다.
    pub async fn run(self, req: Request) -> Result<Response, BoxError> {
        match self {
            Next::Terminal(handler) => handler.call(req).await,
            Next::Chain {
                middlewares,
                handler,
                index,
            } => match middlewares.get(index).cloned() {
                Some(middleware) => {
                    let next = Next::Chain {
                        middlewares,
                        handler,
                        index: index + 1,
                    };
                    middleware.handle(req, next).await
                }
                None => handler.call(req).await,
            },
        }
    }
}

/// 미들웨어 체인과 핸들러를 등록 시점에 합성한 결과입니다.
///
/// 내부가 모두 `Arc`라서 복제가 저렴하고, 요청별 가변 상태를 담지
/// 않으므로 동시 요청 간에 안전하게 공유됩니다.
#[derive(Clone)]
pub enum CompiledHandler {
    /// 미들웨어 없음. 핸들러 그대로, 간접 호출 없음.
    Bare(Arc<dyn Handler>),
    /// 미들웨어 하나. 핸들러를 바로 잇는 컨티뉴에이션으로 충분합니다.
    Single {
        middleware: Arc<dyn Middleware>,
        handler: Arc<dyn Handler>,
    },
    /// 미들웨어 여러 개. 공유 배열과 호출별 인덱스로 전진합니다.
    Chain {
        middlewares: Arc<[Arc<dyn Middleware>]>,
        handler: Arc<dyn Handler>,
    },
}

/// 미들웨어 목록과 핸들러를 하나의 합성 핸들러로 만듭니다.
///
/// 할당은 이 함수(등록 시점)에서만 일어나고,
/// 요청 처리 중에는 추가 합성 비용이 없습니다.
pub fn compile(middlewares: &[Arc<dyn Middleware>], handler: Arc<dyn Handler>) -> CompiledHandler {
    match middlewares {
        [] => CompiledHandler::Bare(handler),
        [middleware] => CompiledHandler::Single {
            middleware: middleware.clone(),
            handler,
        },
        _ => CompiledHandler::Chain {
            middlewares: middlewares.into(),
            handler,
        },
    }
}

impl CompiledHandler {
    /// 합성된 체인을 공급된 순서 그대로 실행합니다.
    pub async fn invoke(&self, req: Request) -> Result<Response, BoxError> {
        match self {
            CompiledHandler::Bare(handler) => handler.call(req).await,
            CompiledHandler::Single {
                middleware,
                handler,
            } => {
                middleware
                    .handle(req, Next::Terminal(handler.clone()))
                    .await
            }
            CompiledHandler::Chain {
                middlewares,
                handler,
            } => {
                let next = Next::Chain {
                    middlewares: middlewares.clone(),
                    handler: handler.clone(),
                    index: 1,
                };
                middlewares[0].handle(req, next).await
            }
        }
    }
}
