use std::io;

/// 서버 실행 중 발생하는 에러입니다.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{address} 바인딩 실패: {source}")]
    Bind {
        address: String,
        source: io::Error,
    },

    #[error("연결 수락 실패: {0}")]
    Accept(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
