mod common;

use api::gql::build_schema;
use async_graphql::Variables;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_add_author_then_query_by_returned_id() {
    let app_state = setup_memory_state();
    let schema = build_schema(app_state.clone());

    let mutation = r#"
        mutation AddAuthor($name: String!) {
            addAuthor(name: $name) {
                id
                name
            }
        }
    "#;
    let response = execute_graphql(
        &schema,
        mutation,
        Some(Variables::from_json(json!({ "name": "X" }))),
    )
    .await;

    assert!(
        response.errors.is_empty(),
        "addAuthor should succeed: {:?}",
        response.errors
    );
    let data = response.data.into_json().unwrap();
    let id = data["addAuthor"]["id"].as_i64().expect("id should be an int");
    assert_eq!(data["addAuthor"]["name"], "X");

    let query = r#"
        query Author($id: Int!) {
            author(id: $id) {
                id
                name
            }
        }
    "#;
    let response = execute_graphql(
        &schema,
        query,
        Some(Variables::from_json(json!({ "id": id }))),
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["author"]["id"], id);
    assert_eq!(data["author"]["name"], "X");
}

#[tokio::test]
async fn test_add_author_assigns_distinct_ids() {
    let app_state = setup_memory_state();
    let schema = build_schema(app_state);

    let mutation = r#"
        mutation {
            first: addAuthor(name: "Tolkien") { id }
            second: addAuthor(name: "Lewis") { id }
        }
    "#;
    let response = execute_graphql(&schema, mutation, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_ne!(data["first"]["id"], data["second"]["id"]);
}

#[tokio::test]
async fn test_missing_author_is_null_not_error() {
    let app_state = setup_memory_state();
    let schema = build_schema(app_state);

    let response = execute_graphql(&schema, "{ author(id: 404) { name } }", None).await;

    assert!(
        response.errors.is_empty(),
        "Missing author should not error: {:?}",
        response.errors
    );
    let data = response.data.into_json().unwrap();
    assert!(data["author"].is_null());
}

#[tokio::test]
async fn test_authors_lists_every_author() {
    let app_state = setup_memory_state();
    let schema = build_schema(app_state.clone());

    create_test_author(&app_state, "Tolkien").await;
    create_test_author(&app_state, "Lewis").await;

    let response = execute_graphql(&schema, "{ authors { id name } }", None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let mut names: Vec<&str> = data["authors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Lewis", "Tolkien"]);
}

#[tokio::test]
async fn test_author_books_returns_exactly_matching_books() {
    let app_state = setup_memory_state();
    let schema = build_schema(app_state.clone());

    let tolkien = create_test_author(&app_state, "Tolkien").await;
    let lewis = create_test_author(&app_state, "Lewis").await;
    let hobbit = create_test_book(&app_state, "The Hobbit", tolkien.id).await;
    let silmarillion = create_test_book(&app_state, "The Silmarillion", tolkien.id).await;
    create_test_book(&app_state, "Narnia", lewis.id).await;

    let query = r#"
        query AuthorBooks($id: Int!) {
            author(id: $id) {
                books { id name authorId }
            }
        }
    "#;
    let response = execute_graphql(
        &schema,
        query,
        Some(Variables::from_json(json!({ "id": tolkien.id }))),
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let books = data["author"]["books"].as_array().unwrap();

    let mut ids: Vec<i64> = books.iter().map(|b| b["id"].as_i64().unwrap()).collect();
    ids.sort();
    assert_eq!(ids, vec![hobbit.id as i64, silmarillion.id as i64]);
    assert!(books.iter().all(|b| b["authorId"] == tolkien.id));
}

#[tokio::test]
async fn test_author_without_books_has_empty_list() {
    let app_state = setup_memory_state();
    let schema = build_schema(app_state.clone());

    let author = create_test_author(&app_state, "Unpublished").await;

    let response = execute_graphql(
        &schema,
        "query($id: Int!) { author(id: $id) { books { id } } }",
        Some(Variables::from_json(json!({ "id": author.id }))),
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["author"]["books"], json!([]));
}

#[tokio::test]
async fn test_add_author_requires_name() {
    let app_state = setup_memory_state();
    let schema = build_schema(app_state.clone());

    let response = execute_graphql(&schema, "mutation { addAuthor { id } }", None).await;

    assert!(!response.errors.is_empty(), "Missing name should fail validation");
    assert!(app_state.store.find_all_authors().await.unwrap().is_empty());
}
