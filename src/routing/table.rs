use std::sync::Arc;

use hyper::Method;
use tracing::debug;

use crate::middleware::{compile, CompiledHandler, Handler, Middleware};
use crate::routing::error::RoutingError;
use crate::routing::params::ParamMap;
use crate::routing::route::{join_paths, normalize_path, parse_param_names, Route};
use crate::routing::trie::PathTrie;

/// 라우트 정의와 매칭 인덱스를 소유하는 라우팅 테이블입니다.
///
/// 애플리케이션 시작 시 단일 스레드 등록 단계에서만 변경되며,
/// 첫 요청을 처리한 이후에는 읽기 전용으로 사용합니다.
/// 이 불변 조건 덕분에 동시 조회에 동기화가 필요 없습니다.
pub struct Router {
    routes: Vec<Route>,
    middlewares: Vec<Arc<dyn Middleware>>,
    trie: PathTrie<CompiledHandler>,
}

impl Router {
    /// 새로운 라우팅 테이블을 생성합니다.
    pub fn new() -> Self {
        Router {
            routes: Vec::new(),
            middlewares: Vec::new(),
            trie: PathTrie::new(),
        }
    }

    /// 테이블 전역 미들웨어를 추가합니다.
    ///
    /// 이 호출 이후에 등록되는 라우트에만 적용됩니다. 이미 합성된
    /// 라우트에는 소급 적용되지 않습니다 (등록 시점 스냅샷).
    /// 모든 라우트에 적용해야 하는 미들웨어는 라우트 등록 전에
    /// 추가해야 합니다.
    pub fn use_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Arc::new(middleware));
    }

    /// 라우트를 등록합니다.
    ///
    /// 경로는 등록 전에 정규화되며, 현재 전역 미들웨어 목록이
    /// 체인 앞부분으로 스냅샷됩니다. 등록은 호출자 관점에서 원자적입니다.
    /// 색인까지 끝나지 않은 라우트는 기록되지 않습니다.
    pub fn route<H: Handler + 'static>(
        &mut self,
        method: Method,
        path: &str,
        handler: H,
    ) -> Result<(), RoutingError> {
        self.route_with(method, path, handler, Vec::new())
    }

    /// 라우트 전용 미들웨어와 함께 라우트를 등록합니다.
    ///
    /// 실행 순서는 전역 미들웨어 → 라우트 전용 미들웨어 → 핸들러입니다.
    pub fn route_with<H: Handler + 'static>(
        &mut self,
        method: Method,
        path: &str,
        handler: H,
        middlewares: Vec<Arc<dyn Middleware>>,
    ) -> Result<(), RoutingError> {
        let mut chain = self.middlewares.clone();
        chain.extend(middlewares);
        self.register(method, path, chain, Arc::new(handler))
    }

    /// GET 라우트를 등록합니다.
    pub fn get<H: Handler + 'static>(&mut self, path: &str, handler: H) -> Result<(), RoutingError> {
        self.route(Method::GET, path, handler)
    }

    /// POST 라우트를 등록합니다.
    pub fn post<H: Handler + 'static>(&mut self, path: &str, handler: H) -> Result<(), RoutingError> {
        self.route(Method::POST, path, handler)
    }

    /// PUT 라우트를 등록합니다.
    pub fn put<H: Handler + 'static>(&mut self, path: &str, handler: H) -> Result<(), RoutingError> {
        self.route(Method::PUT, path, handler)
    }

    /// PATCH 라우트를 등록합니다.
    pub fn patch<H: Handler + 'static>(&mut self, path: &str, handler: H) -> Result<(), RoutingError> {
        self.route(Method::PATCH, path, handler)
    }

    /// DELETE 라우트를 등록합니다.
    pub fn delete<H: Handler + 'static>(&mut self, path: &str, handler: H) -> Result<(), RoutingError> {
        self.route(Method::DELETE, path, handler)
    }

    /// HEAD 라우트를 등록합니다.
    pub fn head<H: Handler + 'static>(&mut self, path: &str, handler: H) -> Result<(), RoutingError> {
        self.route(Method::HEAD, path, handler)
    }

    /// OPTIONS 라우트를 등록합니다.
    pub fn options<H: Handler + 'static>(&mut self, path: &str, handler: H) -> Result<(), RoutingError> {
        self.route(Method::OPTIONS, path, handler)
    }

    /// 접두사 아래에 라우트 그룹을 정의합니다.
    ///
    /// 서브 테이블은 현재 전역 미들웨어 목록을 복사해서 물려받습니다.
    /// `configure` 안에서 그룹 전용 미들웨어(`use_middleware`)와 라우트,
    /// 중첩 그룹을 추가할 수 있고, 결과 라우트는 접두사가 붙은 채로
    /// 이 테이블에 다시 등록됩니다. 중첩 깊이에 제한은 없습니다.
    ///
    /// # 예제
    ///
    /// ```
    /// use web_framework_express::{BoxError, Request, Response};
    /// use web_framework_express::routing::Router;
    /// use bytes::Bytes;
    /// use http_body_util::Full;
    ///
    /// async fn list(_req: Request) -> Result<Response, BoxError> {
    ///     Ok(hyper::Response::new(Full::new(Bytes::from("list"))))
    /// }
    ///
    /// let mut router = Router::new();
    /// router.group("/api", |api| {
    ///     api.get("/users", list)?;
    ///     api.group("/v2", |v2| v2.get("/users", list))
    /// }).unwrap();
    /// ```
    pub fn group(
        &mut self,
        prefix: &str,
        configure: impl FnOnce(&mut Router) -> Result<(), RoutingError>,
    ) -> Result<(), RoutingError> {
        let mut sub = Router {
            routes: Vec::new(),
            middlewares: self.middlewares.clone(),
            trie: PathTrie::new(),
        };
        configure(&mut sub)?;

        // 서브 테이블의 라우트에는 물려받은 전역 미들웨어가 이미
        // 포함되어 있으므로 다시 앞에 붙이지 않는다.
        for route in sub.routes {
            let path = join_paths(prefix, &route.path);
            self.register(route.method, &path, route.middlewares, route.handler)?;
        }
        Ok(())
    }

    /// 독립적으로 구성한 라우팅 테이블을 접두사 아래에 부착합니다.
    ///
    /// `other`의 모든 라우트를 접두사를 붙여 이 테이블에 다시 등록합니다.
    /// 체인은 이 테이블의 전역 미들웨어 ++ 해당 라우트의 기존 체인 순서로
    /// 이어집니다. `other`는 변경되지 않으며, 마운트 이후 `other`에
    /// 추가된 라우트는 이 테이블에 나타나지 않습니다.
    pub fn mount(&mut self, prefix: &str, other: &Router) -> Result<(), RoutingError> {
        for route in other.routes() {
            let path = join_paths(prefix, &route.path);
            let mut chain = self.middlewares.clone();
            chain.extend(route.middlewares.iter().cloned());
            self.register(route.method.clone(), &path, chain, route.handler.clone())?;
        }
        Ok(())
    }

    /// 등록된 라우트의 읽기 전용 스냅샷을 반환합니다.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// `"METHOD:/경로"` 키로 합성 핸들러를 조회합니다.
    pub fn lookup(&self, key: &str) -> Option<(&CompiledHandler, ParamMap)> {
        self.trie.lookup(key)
    }

    fn register(
        &mut self,
        method: Method,
        path: &str,
        middlewares: Vec<Arc<dyn Middleware>>,
        handler: Arc<dyn Handler>,
    ) -> Result<(), RoutingError> {
        let path = normalize_path(path);
        let param_names = parse_param_names(&path)?;

        let compiled = compile(&middlewares, handler.clone());
        let key = format!("{}:{}", method, path);
        self.trie.insert(&key, compiled)?;

        debug!(
            method = %method,
            path = %path,
            middleware_count = middlewares.len(),
            "라우트 등록"
        );

        self.routes.push(Route {
            method,
            path,
            param_names,
            middlewares,
            handler,
        });
        Ok(())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
