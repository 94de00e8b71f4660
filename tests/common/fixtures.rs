//! Posts payload fixtures

/// Document with no posts
pub const EMPTY_POSTS_JSON: &str = r#"{"items": []}"#;

/// Document with two posts, in order (A, B) then (C, D)
pub const TWO_POSTS_JSON: &str = r#"{
    "items": [
        {"title": "A", "description": "B"},
        {"title": "C", "description": "D"}
    ]
}"#;

/// Syntactically valid JSON that is not a posts document
pub const WRONG_SHAPE_JSON: &str = r#"{"posts": [{"title": "A", "description": "B"}]}"#;

/// Not JSON at all
pub const MALFORMED_BODY: &str = "<html>Service Unavailable</html>";
