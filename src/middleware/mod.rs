//! 미들웨어 합성 엔진을 제공하는 모듈입니다.

pub mod chain;
pub mod traits;

pub use chain::{compile, CompiledHandler, Next};
pub use traits::{Handler, Middleware};
