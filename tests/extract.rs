use followback::extract::extract;
use followback::model::{Role, Username};
use followback::report::unfollowers;
use serde_json::{json, Value};

fn fixture(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

fn names(users: impl IntoIterator<Item = Username>) -> Vec<String> {
    users.into_iter().map(|u| u.to_string()).collect()
}

#[test]
fn followers_fixture() {
    let raw = fixture(include_bytes!("fixtures/followers_1.json"));
    let out = extract(&raw, Role::Followers).unwrap();

    assert_eq!(names(out.users), vec!["alice", "bob", "carol", "erin"]);
    assert_eq!(out.problems.len(), 1);
    assert_eq!(out.problems[0].context, "root");
    assert_eq!(out.problems[0].index, 4);
}

#[test]
fn following_fixture() {
    let raw = fixture(include_bytes!("fixtures/following.json"));
    let out = extract(&raw, Role::Following).unwrap();

    assert_eq!(
        names(out.users),
        vec!["alice", "bob", "dave", "erin", "frank"]
    );
    assert_eq!(out.problems.len(), 1);
    assert_eq!(out.problems[0].context, "relationships_following");
    assert_eq!(out.problems[0].index, 5);
}

#[test]
fn problem_entries_preserve_raw_elements() {
    let source = include_str!("fixtures/numeric_problems.json");
    let raw = fixture(source.as_bytes());
    let out = extract(&raw, Role::Followers).unwrap();

    assert_eq!(names(out.users), vec!["ok"]);
    let serialized: Vec<String> = out
        .problems
        .iter()
        .map(|p| serde_json::to_string(&p.raw).unwrap())
        .collect();
    let expected = [
        r#"{"foo":1.10,"big":123456789012345678901234567890,"e":1e2}"#,
        r#"{"score":1e400,"tags":[-0.0,3.14159265358979323846]}"#,
    ];
    assert_eq!(serialized, expected);
    for text in expected {
        assert!(source.contains(text), "{text}");
    }
}

#[test]
fn mixed_shapes_compare_case_insensitively() {
    let followers = json!([{"string_list_data": [{"value": "bob"}]}]);
    let following = json!({"relationships_following": [{"title": "Bob"}, {"title": "carol"}]});

    let followers = extract(&followers, Role::Followers).unwrap();
    let following = extract(&following, Role::Following).unwrap();

    assert_eq!(
        names(unfollowers(&followers.users, &following.users)),
        vec!["carol"]
    );
}

#[test]
fn whitespace_and_case_variants_are_one_user() {
    let followers = json!({"followers": [" Alice "]});
    let following = json!({"following": ["alice", "ALICE", {"username": "Zoe"}]});

    let followers = extract(&followers, Role::Followers).unwrap();
    let following = extract(&following, Role::Following).unwrap();

    assert_eq!(following.users.len(), 2);
    assert_eq!(
        names(unfollowers(&followers.users, &following.users)),
        vec!["zoe"]
    );
}

#[test]
fn connections_and_list_keys() {
    let raw = json!({"connections": [{"name": "Gus"}]});
    let out = extract(&raw, Role::Followers).unwrap();
    assert_eq!(names(out.users), vec!["gus"]);

    let raw = json!({"list": [{"value": "hal"}]});
    let out = extract(&raw, Role::Following).unwrap();
    assert_eq!(names(out.users), vec!["hal"]);
}

#[test]
fn scanned_fields_report_their_key() {
    let raw = json!({
        "page_one": [{"username": "ivy"}, {"unknown": true}],
        "page_two": ["jay", 12]
    });
    let out = extract(&raw, Role::Followers).unwrap();

    assert_eq!(names(out.users), vec!["ivy", "jay"]);
    let contexts: Vec<_> = out
        .problems
        .iter()
        .map(|p| (p.context.as_str(), p.index))
        .collect();
    assert_eq!(contexts, vec![("scan:page_one", 1), ("scan:page_two", 1)]);
}
