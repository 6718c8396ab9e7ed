//! 디스패처를 HTTP/1.1 리스너에 연결하는 전송 계층 모듈입니다.

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::StatusCode;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, error, info};
use uuid::Uuid;

mod error;
pub use error::{Result, ServerError};

use crate::dispatch::Dispatcher;
use crate::settings::ServerSettings;
use crate::{Request, Response};

/// 디스패처로 요청을 넘기는 HTTP/1.1 서버입니다.
///
/// 라우팅 코어 바깥의 에러 처리 계층을 겸합니다. 핸들러나 미들웨어가
/// `Err`를 반환하면 여기서 500 응답으로 변환합니다. 코어 자체는
/// 아무것도 잡지 않습니다.
pub struct HttpServer {
    settings: ServerSettings,
    dispatcher: Arc<Dispatcher>,
}

impl HttpServer {
    pub fn new(settings: ServerSettings, dispatcher: Dispatcher) -> Self {
        Self {
            settings,
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// 리스너를 바인딩하고 연결을 수락합니다.
    pub async fn run(self) -> Result<()> {
        let address = format!("{}:{}", self.settings.bind_address, self.settings.http_port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            error!(error = %e, address = %address, "HTTP 포트 바인딩 실패");
            ServerError::Bind {
                address: address.clone(),
                source: e,
            }
        })?;

        info!(address = %address, "HTTP 리스너 시작");

        loop {
            match listener.accept().await {
                Ok((stream, _)) => {
                    let dispatcher = self.dispatcher.clone();
                    tokio::spawn(async move {
                        let io = TokioIo::new(stream);
                        let service =
                            service_fn(move |req| handle_request(dispatcher.clone(), req));
                        if let Err(err) = http1::Builder::new().serve_connection(io, service).await
                        {
                            error!(error = %err, "HTTP 연결 처리 실패");
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "HTTP 연결 수락 실패");
                }
            }
        }
    }
}

/// 수신 요청 본문을 버퍼링한 뒤 디스패처로 넘깁니다.
async fn handle_request(
    dispatcher: Arc<Dispatcher>,
    req: hyper::Request<Incoming>,
) -> std::result::Result<Response, Infallible> {
    let request_id = Uuid::new_v4();
    let (parts, body) = req.into_parts();

    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            error!(request_id = %request_id, error = %e, "요청 본문 읽기 실패");
            return Ok(error_response(StatusCode::BAD_REQUEST, "Bad Request"));
        }
    };

    let req: Request = hyper::Request::from_parts(parts, Full::new(bytes));
    debug!(
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
        "요청 수신"
    );

    match dispatcher.dispatch(req).await {
        Ok(response) => Ok(response),
        Err(e) => {
            error!(request_id = %request_id, error = %e, "핸들러 실행 실패");
            Ok(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            ))
        }
    }
}

fn error_response(status: StatusCode, message: &'static str) -> Response {
    hyper::Response::builder()
        .status(status)
        .body(Full::new(Bytes::from_static(message.as_bytes())))
        .unwrap_or_else(|_| hyper::Response::new(Full::new(Bytes::from_static(message.as_bytes()))))
}
