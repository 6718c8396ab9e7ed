//! web_framework_express는 등록 시점 미들웨어 합성을 지원하는 경량 HTTP 웹 프레임워크 코어입니다.
//!
//! # 주요 기능
//!
//! - 메서드 + 경로 기반 라우팅 (리터럴 세그먼트와 `:name` 파라미터 세그먼트)
//! - 등록 시점에 합성되는 미들웨어 체인 (요청 처리 중 합성 비용 없음)
//! - 라우트 그룹과 서브 라우터 마운트
//! - 에러 처리 및 로깅
//!
//! # 예제
//!
//! ```
//! use web_framework_express::{BoxError, Request, Response};
//! use web_framework_express::routing::{PathParams, Router};
//! use bytes::Bytes;
//! use http_body_util::Full;
//! use hyper::StatusCode;
//!
//! async fn show_user(req: Request) -> Result<Response, BoxError> {
//!     let id = req.extensions()
//!         .get::<PathParams>()
//!         .and_then(|params| params.get("id"))
//!         .unwrap_or("unknown")
//!         .to_string();
//!
//!     Ok(hyper::Response::builder()
//!         .status(StatusCode::OK)
//!         .body(Full::new(Bytes::from(format!("user {}", id))))?)
//! }
//!
//! let mut router = Router::new();
//! router.get("/users/:id", show_user).unwrap();
//! ```
//!
//! # 미들웨어
//!
//! 미들웨어는 `next.run(req)` 호출 앞뒤로 로직을 실행할 수 있고,
//! `next`를 호출하지 않으면 이후 체인은 실행되지 않습니다.
//!
//! ```
//! use web_framework_express::{BoxError, Request, Response};
//! use web_framework_express::middleware::{Middleware, Next};
//! use web_framework_express::routing::Router;
//! use async_trait::async_trait;
//!
//! struct RequestLogger;
//!
//! #[async_trait]
//! impl Middleware for RequestLogger {
//!     async fn handle(&self, req: Request, next: Next) -> Result<Response, BoxError> {
//!         tracing::info!(path = %req.uri().path(), "요청 수신");
//!         let res = next.run(req).await?;
//!         tracing::info!(status = %res.status(), "응답 전송");
//!         Ok(res)
//!     }
//! }
//!
//! let mut router = Router::new();
//! router.use_middleware(RequestLogger);
//! ```
//!
//! # 그룹과 마운트
//!
//! ```
//! use web_framework_express::{BoxError, Request, Response};
//! use web_framework_express::routing::Router;
//! use bytes::Bytes;
//! use http_body_util::Full;
//!
//! async fn list_users(_req: Request) -> Result<Response, BoxError> {
//!     Ok(hyper::Response::new(Full::new(Bytes::from("users"))))
//! }
//!
//! let mut router = Router::new();
//! router.group("/api", |api| {
//!     api.get("/users", list_users)
//! }).unwrap();
//!
//! // 별도로 구성한 서브 라우터를 접두사 아래에 부착
//! let mut admin = Router::new();
//! admin.get("/stats", list_users).unwrap();
//! router.mount("/admin", &admin).unwrap();
//! ```

pub mod logging;
pub mod routing;
pub mod middleware;
pub mod dispatch;
pub mod server;
pub mod settings;

/// 프레임워크 전역에서 사용하는 버퍼링된 요청/응답 본문 타입입니다.
pub type Body = http_body_util::Full<bytes::Bytes>;

/// 프레임워크가 처리하는 HTTP 요청 타입입니다.
pub type Request = hyper::Request<Body>;

/// 핸들러와 미들웨어가 생성하는 HTTP 응답 타입입니다.
pub type Response = hyper::Response<Body>;

/// 핸들러와 미들웨어가 전파하는 불투명한 에러 타입입니다.
///
/// 코어는 이 에러를 잡지 않고 그대로 전파하며,
/// HTTP 에러 응답으로의 변환은 서버 계층이 담당합니다.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
