use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::{Method, StatusCode};
use web_framework_express::routing::{Router, RoutingError};
use web_framework_express::{BoxError, Request, Response};

fn request(method: Method, path: &str) -> Request {
    hyper::Request::builder()
        .method(method)
        .uri(path)
        .body(Full::new(Bytes::new()))
        .unwrap()
}

fn text_response(status: StatusCode, body: &str) -> Response {
    hyper::Response::builder()
        .status(status)
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}

async fn body_string(res: Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn ok_handler(_req: Request) -> Result<Response, BoxError> {
    Ok(text_response(StatusCode::OK, "ok"))
}

#[test]
fn test_route_path_normalization() {
    let mut router = Router::new();

    // 선행 슬래시가 없으면 붙이고, 끝의 슬래시는 제거
    router.get("users", ok_handler).unwrap();
    assert_eq!(router.routes()[0].path, "/users");
    assert!(router.lookup("GET:/users").is_some());

    router.get("//posts/", ok_handler).unwrap();
    assert_eq!(router.routes()[1].path, "/posts");
    assert!(router.lookup("GET:/posts").is_some());

    // 루트는 그대로 유지
    router.get("/", ok_handler).unwrap();
    assert_eq!(router.routes()[2].path, "/");
    assert!(router.lookup("GET:/").is_some());
}

#[test]
fn test_param_names_recorded_in_order() {
    let mut router = Router::new();
    router
        .get("/posts/:postId/comments/:commentId", ok_handler)
        .unwrap();

    let route = &router.routes()[0];
    assert_eq!(route.param_names, vec!["postId", "commentId"]);
}

#[test]
fn test_per_method_wrappers() {
    let mut router = Router::new();
    router.get("/r", ok_handler).unwrap();
    router.post("/r", ok_handler).unwrap();
    router.put("/r", ok_handler).unwrap();
    router.patch("/r", ok_handler).unwrap();
    router.delete("/r", ok_handler).unwrap();
    router.head("/r", ok_handler).unwrap();
    router.options("/r", ok_handler).unwrap();

    for method in ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"] {
        assert!(
            router.lookup(&format!("{}:/r", method)).is_some(),
            "{} 라우트가 조회되지 않음",
            method
        );
    }
}

#[test]
fn test_invalid_pattern_fails_at_registration() {
    let mut router = Router::new();

    let result = router.get("/users/:", ok_handler);
    assert!(matches!(
        result,
        Err(RoutingError::InvalidPathPattern { .. })
    ));

    // 실패한 등록은 기록도 색인도 되지 않음 (원자성)
    assert!(router.routes().is_empty());
    assert!(router.lookup("GET:/users/:").is_none());
}

#[tokio::test]
async fn test_duplicate_registration_last_wins() {
    async fn first(_req: Request) -> Result<Response, BoxError> {
        Ok(text_response(StatusCode::OK, "first"))
    }
    async fn second(_req: Request) -> Result<Response, BoxError> {
        Ok(text_response(StatusCode::OK, "second"))
    }

    let mut router = Router::new();
    router.get("/dup", first).unwrap();
    router.get("/dup", second).unwrap();

    // 색인에는 마지막 등록만 도달 가능
    let (compiled, _) = router.lookup("GET:/dup").unwrap();
    let res = compiled.clone().invoke(request(Method::GET, "/dup")).await.unwrap();
    assert_eq!(body_string(res).await, "second");

    // 정의 목록에는 두 등록 모두 남는다
    assert_eq!(router.routes().len(), 2);
}

#[tokio::test]
async fn test_compiled_handler_runs_without_middleware() {
    let mut router = Router::new();
    router.get("/hello", ok_handler).unwrap();

    let (compiled, params) = router.lookup("GET:/hello").unwrap();
    assert!(params.is_empty());

    let res = compiled
        .clone()
        .invoke(request(Method::GET, "/hello"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "ok");
}
