//! 메서드 + 경로 기반 라우팅의 핵심 기능을 제공하는 모듈입니다.

mod error;
mod params;
mod route;
mod table;
mod trie;

pub use error::RoutingError;
pub use params::{ParamMap, PathParams};
pub use route::{join_paths, normalize_path, parse_param_names, Route};
pub use table::Router;
pub use trie::PathTrie;

pub use hyper::Method;
