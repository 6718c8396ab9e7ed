use std::collections::HashMap;

use crate::routing::error::RoutingError;
use crate::routing::params::ParamMap;

/// `"METHOD:/세그먼트/..."` 키로 엔트리를 색인하는 라우팅 트라이입니다.
///
/// 리터럴 세그먼트와 `/`로 구분된 한 세그먼트를 차지하는 `:name`
/// 파라미터 세그먼트를 지원합니다. 부분 세그먼트 매칭이나 와일드카드는
/// 지원하지 않습니다.
pub struct PathTrie<T> {
    methods: HashMap<String, Node<T>>,
}

struct Node<T> {
    literals: HashMap<String, Node<T>>,
    param: Option<Box<ParamEdge<T>>>,
    entry: Option<T>,
}

struct ParamEdge<T> {
    name: String,
    node: Node<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node {
            literals: HashMap::new(),
            param: None,
            entry: None,
        }
    }
}

impl<T> PathTrie<T> {
    /// 빈 트라이를 생성합니다.
    pub fn new() -> Self {
        PathTrie {
            methods: HashMap::new(),
        }
    }

    /// `"METHOD:/경로"` 키로 엔트리를 삽입합니다.
    ///
    /// 삽입 전에 경로 끝의 `/`를 제거합니다 (루트 `/` 제외).
    /// 동일한 키를 다시 삽입하면 기존 엔트리를 덮어씁니다 (마지막 등록 우선).
    /// 이는 에러가 아니라 의도된 동작입니다.
    ///
    /// # 반환
    ///
    /// 이름 없는 파라미터 세그먼트나 같은 위치의 파라미터 이름 충돌은
    /// `RoutingError`로 즉시 실패합니다.
    pub fn insert(&mut self, key: &str, entry: T) -> Result<(), RoutingError> {
        let (method, path) = split_key(key)?;
        let path = strip_trailing_slash(path);

        let mut node: &mut Node<T> = self.methods.entry(method.to_string()).or_default();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if let Some(name) = segment.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RoutingError::InvalidPathPattern {
                        pattern: key.to_string(),
                        reason: "파라미터 이름이 비어 있습니다".to_string(),
                    });
                }
                let edge = node.param.get_or_insert_with(|| {
                    Box::new(ParamEdge {
                        name: name.to_string(),
                        node: Node::default(),
                    })
                });
                if edge.name != name {
                    return Err(RoutingError::InvalidPathPattern {
                        pattern: key.to_string(),
                        reason: format!(
                            "같은 위치에 서로 다른 파라미터 이름이 등록됨: :{} vs :{}",
                            edge.name, name
                        ),
                    });
                }
                node = &mut edge.node;
            } else {
                node = node.literals.entry(segment.to_string()).or_default();
            }
        }

        node.entry = Some(entry);
        Ok(())
    }

    /// `"METHOD:/경로"` 키로 엔트리를 조회합니다.
    ///
    /// 세그먼트 단위로 트라이를 내려가며, 각 단계에서 리터럴 자식을
    /// 파라미터 자식보다 우선합니다 (`/users/new`와 `/users/:id`의 모호성 방지).
    /// 리터럴 분기에서 끝까지 매칭하지 못하면 파라미터 분기로 되돌아갑니다.
    ///
    /// # 반환
    ///
    /// 매칭 시 엔트리와 파라미터 맵을, 실패 시 `None`을 반환합니다.
    /// 404 응답 생성은 디스패처의 책임입니다.
    pub fn lookup(&self, key: &str) -> Option<(&T, ParamMap)> {
        let (method, path) = split_key(key).ok()?;
        let path = strip_trailing_slash(path);

        let node = self.methods.get(method)?;
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut matched = Vec::new();
        let entry = Self::match_segments(node, &segments, &mut matched)?;

        let params = matched
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Some((entry, params))
    }

    fn match_segments<'t, 'p>(
        node: &'t Node<T>,
        segments: &[&'p str],
        matched: &mut Vec<(&'t str, &'p str)>,
    ) -> Option<&'t T> {
        let Some((first, rest)) = segments.split_first() else {
            return node.entry.as_ref();
        };

        // 리터럴 우선
        if let Some(child) = node.literals.get(*first) {
            if let Some(found) = Self::match_segments(child, rest, matched) {
                return Some(found);
            }
        }

        if let Some(edge) = node.param.as_deref() {
            matched.push((edge.name.as_str(), first));
            if let Some(found) = Self::match_segments(&edge.node, rest, matched) {
                return Some(found);
            }
            matched.pop();
        }

        None
    }
}

impl<T> Default for PathTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn split_key(key: &str) -> Result<(&str, &str), RoutingError> {
    match key.split_once(':') {
        Some((method, path)) if !method.is_empty() && path.starts_with('/') => Ok((method, path)),
        _ => Err(RoutingError::InvalidRouteKey {
            key: key.to_string(),
            reason: "\"METHOD:/경로\" 형식이어야 합니다".to_string(),
        }),
    }
}

// 루트 "/"는 빈 문자열로 줄이지 않고 그대로 둔다.
fn strip_trailing_slash(path: &str) -> &str {
    let stripped = path.trim_end_matches('/');
    if stripped.is_empty() {
        "/"
    } else {
        stripped
    }
}
