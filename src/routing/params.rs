use std::collections::HashMap;

/// 파라미터 이름에서 매칭된 값으로의 매핑입니다.
///
/// 요청마다 새로 생성되며 해당 요청보다 오래 유지되지 않습니다.
pub type ParamMap = HashMap<String, String>;

/// 요청 확장(extensions)에 저장되는 경로 파라미터입니다.
///
/// 디스패처가 매칭된 요청에 주입합니다.
///
/// # 예제
///
/// ```
/// use web_framework_express::routing::{ParamMap, PathParams};
///
/// let mut map = ParamMap::new();
/// map.insert("id".to_string(), "42".to_string());
///
/// let params = PathParams(map);
/// assert_eq!(params.get("id"), Some("42"));
/// assert_eq!(params.get("name"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathParams(pub ParamMap);

impl PathParams {
    /// 이름으로 파라미터 값을 조회합니다.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}
