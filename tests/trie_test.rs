use web_framework_express::routing::{PathTrie, RoutingError};

#[test]
fn test_literal_insert_and_lookup() {
    let mut trie = PathTrie::new();
    trie.insert("GET:/users", 1).unwrap();

    // 등록된 키 조회
    let (entry, params) = trie.lookup("GET:/users").unwrap();
    assert_eq!(*entry, 1);
    assert!(params.is_empty());

    // 다른 메서드는 매칭되지 않음
    assert!(trie.lookup("POST:/users").is_none());

    // 다른 경로도 매칭되지 않음
    assert!(trie.lookup("GET:/users/42").is_none());
}

#[test]
fn test_root_path() {
    let mut trie = PathTrie::new();
    trie.insert("GET:/", 1).unwrap();

    let (entry, _) = trie.lookup("GET:/").unwrap();
    assert_eq!(*entry, 1);
}

#[test]
fn test_param_extraction() {
    let mut trie = PathTrie::new();
    trie.insert("GET:/posts/:postId/comments/:commentId", 1).unwrap();

    let (entry, params) = trie.lookup("GET:/posts/42/comments/7").unwrap();
    assert_eq!(*entry, 1);
    assert_eq!(params.get("postId").map(String::as_str), Some("42"));
    assert_eq!(params.get("commentId").map(String::as_str), Some("7"));
    assert_eq!(params.len(), 2);

    // 세그먼트 수가 다르면 매칭되지 않음
    assert!(trie.lookup("GET:/posts/42/comments").is_none());
    assert!(trie.lookup("GET:/posts/42/comments/7/extra").is_none());
}

#[test]
fn test_static_over_dynamic_precedence() {
    let mut trie = PathTrie::new();
    trie.insert("GET:/users/new", 1).unwrap();
    trie.insert("GET:/users/:id", 2).unwrap();

    // 리터럴 라우트가 우선
    let (entry, params) = trie.lookup("GET:/users/new").unwrap();
    assert_eq!(*entry, 1);
    assert!(params.is_empty());

    // 그 외에는 파라미터 라우트로 매칭
    let (entry, params) = trie.lookup("GET:/users/77").unwrap();
    assert_eq!(*entry, 2);
    assert_eq!(params.get("id").map(String::as_str), Some("77"));
}

#[test]
fn test_literal_dead_end_falls_back_to_param() {
    let mut trie = PathTrie::new();
    trie.insert("GET:/users/new/profile", 1).unwrap();
    trie.insert("GET:/users/:id", 2).unwrap();

    // 리터럴 분기(new)로 내려가면 끝까지 매칭되지 않으므로
    // 파라미터 분기로 되돌아가야 한다
    let (entry, params) = trie.lookup("GET:/users/new").unwrap();
    assert_eq!(*entry, 2);
    assert_eq!(params.get("id").map(String::as_str), Some("new"));

    let (entry, _) = trie.lookup("GET:/users/new/profile").unwrap();
    assert_eq!(*entry, 1);
}

#[test]
fn test_trailing_slash_normalization() {
    let mut trie = PathTrie::new();
    trie.insert("GET:/users/", 1).unwrap();

    // 삽입과 조회 모두에서 끝의 슬래시가 제거됨
    assert!(trie.lookup("GET:/users").is_some());
    assert!(trie.lookup("GET:/users/").is_some());

    // 루트는 빈 문자열로 줄어들지 않음
    trie.insert("GET:/", 2).unwrap();
    let (entry, _) = trie.lookup("GET:/").unwrap();
    assert_eq!(*entry, 2);
}

#[test]
fn test_duplicate_insert_last_write_wins() {
    let mut trie = PathTrie::new();
    trie.insert("GET:/dup", 1).unwrap();
    trie.insert("GET:/dup", 2).unwrap();

    let (entry, _) = trie.lookup("GET:/dup").unwrap();
    assert_eq!(*entry, 2);
}

#[test]
fn test_invalid_key_format() {
    let mut trie = PathTrie::new();

    // 콜론 없음
    assert!(matches!(
        trie.insert("GET/users", 1),
        Err(RoutingError::InvalidRouteKey { .. })
    ));

    // 경로가 /로 시작하지 않음
    assert!(matches!(
        trie.insert("GET:users", 1),
        Err(RoutingError::InvalidRouteKey { .. })
    ));
}

#[test]
fn test_empty_param_name_fails() {
    let mut trie = PathTrie::new();
    assert!(matches!(
        trie.insert("GET:/users/:", 1),
        Err(RoutingError::InvalidPathPattern { .. })
    ));
}

#[test]
fn test_conflicting_param_names_fail() {
    let mut trie = PathTrie::new();
    trie.insert("GET:/users/:id", 1).unwrap();

    // 같은 위치에 다른 이름의 파라미터는 등록 시점에 실패
    assert!(matches!(
        trie.insert("GET:/users/:uid/posts", 2),
        Err(RoutingError::InvalidPathPattern { .. })
    ));

    // 같은 이름이면 허용
    trie.insert("GET:/users/:id/posts", 3).unwrap();
    let (entry, params) = trie.lookup("GET:/users/9/posts").unwrap();
    assert_eq!(*entry, 3);
    assert_eq!(params.get("id").map(String::as_str), Some("9"));
}
