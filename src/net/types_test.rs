use super::*;

// =============================================================
// Wire format field names
// =============================================================

#[test]
fn login_response_parses_wire_field_names() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"access_token":"tok1","username":"alice","userId":7}"#,
    )
    .expect("login response");
    assert_eq!(resp.access_token, "tok1");
    assert_eq!(resp.username, "alice");
    assert_eq!(resp.user_id, 7);
}

#[test]
fn todo_parses_camel_case_completion_flag() {
    let todo: Todo = serde_json::from_str(
        r#"{"id":1,"title":"milk","description":"2 liters","isCompleted":true}"#,
    )
    .expect("todo");
    assert_eq!(todo.id, 1);
    assert_eq!(todo.title, "milk");
    assert!(todo.is_completed);
}

#[test]
fn todo_description_defaults_to_empty() {
    let todo: Todo =
        serde_json::from_str(r#"{"id":2,"title":"bread","isCompleted":false}"#).expect("todo");
    assert_eq!(todo.description, "");
}

#[test]
fn new_todo_serializes_camel_case_completion_flag() {
    let body = serde_json::to_value(NewTodo {
        title: "milk",
        description: "",
        is_completed: false,
    })
    .expect("serialize");
    assert_eq!(body["isCompleted"], serde_json::json!(false));
    assert_eq!(body["title"], serde_json::json!("milk"));
}

#[test]
fn todo_patch_omits_absent_fields() {
    let patch = TodoPatch {
        is_completed: Some(true),
        ..TodoPatch::default()
    };
    let body = serde_json::to_value(&patch).expect("serialize");
    assert_eq!(body, serde_json::json!({"isCompleted": true}));
}

#[test]
fn credentials_serialize_as_plain_fields() {
    let body = serde_json::to_value(Credentials {
        username: "alice",
        password: "secret",
    })
    .expect("serialize");
    assert_eq!(
        body,
        serde_json::json!({"username": "alice", "password": "secret"})
    );
}
