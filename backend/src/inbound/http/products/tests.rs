//! Handler tests against mocked driving ports.

use super::*;
use crate::domain::ports::{MockFoodProductsCommand, MockFoodProductsQuery};
use crate::domain::{Error, Ingredients, PageRequest, ProductId, ProductName};
use crate::inbound::http::test_utils::{TEST_API_KEY, state_with};
use actix_web::http::StatusCode;
use actix_web::http::header::WWW_AUTHENTICATE;
use actix_web::{App, test};
use rstest::rstest;
use serde_json::{Value, json};

fn product(id: i32, name: &str) -> FoodProduct {
    FoodProduct::new(
        ProductId::new(id),
        ProductName::new(name).expect("valid name"),
        Ingredients::new("oats, milk").expect("valid ingredients"),
    )
}

async fn send(
    query: MockFoodProductsQuery,
    command: MockFoodProductsCommand,
    request: test::TestRequest,
) -> actix_web::dev::ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(state_with(query, command))
            .service(list_products)
            .service(add_product)
            .service(get_product),
    )
    .await;
    test::call_service(&app, request.to_request()).await
}

fn add_request(key: Option<&str>, body: &str) -> test::TestRequest {
    let mut request = test::TestRequest::post()
        .uri("/add-product")
        .insert_header(("content-type", "application/json"))
        .set_payload(body.to_owned());
    if let Some(key) = key {
        request = request.insert_header(("X-API-Key", key));
    }
    request
}

#[actix_web::test]
async fn list_uses_default_window() {
    let mut query = MockFoodProductsQuery::new();
    query
        .expect_list_products()
        .withf(|page| *page == PageRequest::default())
        .times(1)
        .return_once(|_| Ok(vec![]));

    let res = send(
        query,
        MockFoodProductsCommand::new(),
        test::TestRequest::get().uri("/all-products"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn list_passes_explicit_window() {
    let mut query = MockFoodProductsQuery::new();
    query
        .expect_list_products()
        .withf(|page| page.skip() == 5 && page.limit() == 2)
        .return_once(|_| Ok(vec![product(6, "Porridge")]));

    let res = send(
        query,
        MockFoodProductsCommand::new(),
        test::TestRequest::get().uri("/all-products?skip=5&limit=2"),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!([{"id": 6, "name": "Porridge", "ingredients": "oats, milk"}])
    );
}

#[rstest]
#[case("/all-products?skip=-1")]
#[case("/all-products?limit=0")]
#[case("/all-products?limit=lots")]
#[actix_web::test]
async fn list_rejects_bad_parameters_without_querying(#[case] uri: &str) {
    let mut query = MockFoodProductsQuery::new();
    query.expect_list_products().times(0);

    let res = send(
        query,
        MockFoodProductsCommand::new(),
        test::TestRequest::get().uri(uri),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn add_returns_created_product() {
    let mut command = MockFoodProductsCommand::new();
    command
        .expect_add_product()
        .withf(|new| new.name.as_ref() == "Porridge")
        .times(1)
        .return_once(|new| Ok(new.with_id(ProductId::new(1))));

    let res = send(
        MockFoodProductsQuery::new(),
        command,
        add_request(
            Some(TEST_API_KEY),
            r#"{"name":"Porridge","ingredients":"oats, milk"}"#,
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Porridge");
}

#[rstest]
#[case(None)]
#[case(Some("wrong"))]
#[actix_web::test]
async fn add_rejects_bad_key_before_parsing(#[case] key: Option<&str>) {
    let mut command = MockFoodProductsCommand::new();
    command.expect_add_product().times(0);

    let res = send(
        MockFoodProductsQuery::new(),
        command,
        add_request(key, "this is not json"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        res.headers().get(WWW_AUTHENTICATE).map(|v| v.as_bytes()),
        Some(b"ApiKey".as_slice())
    );
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "forbidden");
    assert_eq!(body["message"], "Could not validate API key");
}

#[rstest]
#[case(r#"{"id":3,"name":"Porridge","ingredients":"oats"}"#)]
#[case(r#"{"name":"Porridge"}"#)]
#[case("{")]
#[actix_web::test]
async fn add_rejects_invalid_bodies(#[case] body: &str) {
    let mut command = MockFoodProductsCommand::new();
    command.expect_add_product().times(0);

    let res = send(
        MockFoodProductsQuery::new(),
        command,
        add_request(Some(TEST_API_KEY), body),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[rstest]
#[case(Error::conflict("A product with this name already exists"), StatusCode::CONFLICT)]
#[case(Error::internal("Internal server error"), StatusCode::INTERNAL_SERVER_ERROR)]
#[actix_web::test]
async fn add_maps_command_failures(#[case] failure: Error, #[case] status: StatusCode) {
    let mut command = MockFoodProductsCommand::new();
    command
        .expect_add_product()
        .return_once(move |_| Err(failure));

    let res = send(
        MockFoodProductsQuery::new(),
        command,
        add_request(Some(TEST_API_KEY), r#"{"name":"Porridge","ingredients":"oats"}"#),
    )
    .await;
    assert_eq!(res.status(), status);
}

#[actix_web::test]
async fn get_returns_matching_product() {
    let mut query = MockFoodProductsQuery::new();
    query
        .expect_find_product()
        .withf(|fragment| fragment == "Porr")
        .return_once(|_| Ok(product(2, "Porridge")));

    let res = send(
        query,
        MockFoodProductsCommand::new(),
        test::TestRequest::get().uri("/product/Porr"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], 2);
}

#[actix_web::test]
async fn get_decodes_percent_escapes() {
    let mut query = MockFoodProductsQuery::new();
    query
        .expect_find_product()
        .withf(|fragment| fragment == "Apple pie")
        .return_once(|_| Ok(product(1, "Apple pie")));

    let res = send(
        query,
        MockFoodProductsCommand::new(),
        test::TestRequest::get().uri("/product/Apple%20pie"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn get_reports_missing_product() {
    let mut query = MockFoodProductsQuery::new();
    query
        .expect_find_product()
        .return_once(|_| Err(Error::not_found("Product not found")));

    let res = send(
        query,
        MockFoodProductsCommand::new(),
        test::TestRequest::get().uri("/product/zzz"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
}
