//! Product catalog: the static dataset and its route handlers.
//!
//! Three handlers over one fixed, read-only product list. A lookup that
//! finds nothing is not an error — the handler answers with a well-formed
//! `{"status":"fail", …}` JSON body and the request completes normally.

use serde::Serialize;

use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};

#[derive(Debug, Serialize)]
pub struct Product {
    pub id: u32,
    pub category: &'static str,
    pub name: &'static str,
    pub price: u32,
}

static PRODUCTS: [Product; 3] = [
    Product { id: 1, category: "Phones", name: "Xiomi", price: 600 },
    Product { id: 2, category: "Fruit", name: "Orange", price: 2 },
    Product { id: 3, category: "Vehicles", name: "Subaru Forester", price: 20000 },
];

#[derive(Serialize)]
struct Fail {
    status: &'static str,
    message: &'static str,
}

fn fail(message: &'static str) -> Response {
    Json(Fail { status: "fail", message }).into_response()
}

fn find(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// `GET /products` — the whole catalog as a JSON array.
pub async fn list(_req: Request) -> Response {
    Json(&PRODUCTS).into_response()
}

/// `GET /products/:productId`
pub async fn detail(req: Request) -> Response {
    // A non-numeric id can never name a product; treat the failed parse as
    // a lookup miss directly rather than coercing through a sentinel value.
    let product = req
        .param("productId")
        .and_then(|v| v.parse::<u32>().ok())
        .and_then(find);

    match product {
        Some(p) => Json(p).into_response(),
        None => fail("product not found"),
    }
}

/// `GET /products/:category/:productId` — id must match and the category
/// must match case-insensitively.
pub async fn detail_in_category(req: Request) -> Response {
    let id = req.param("productId").and_then(|v| v.parse::<u32>().ok());
    let category = req.param("category");

    let product = match (id, category) {
        (Some(id), Some(category)) => PRODUCTS
            .iter()
            .find(|p| p.id == id && p.category.eq_ignore_ascii_case(category)),
        _ => None,
    };

    match product {
        Some(p) => Json(p).into_response(),
        None => fail("product not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Router;

    fn app() -> Router {
        Router::new()
            .on("/products", list)
            .on("/products/:productId", detail)
            .on("/products/:category/:productId", detail_in_category)
    }

    #[tokio::test]
    async fn list_returns_the_whole_catalog() {
        let res = app().route("GET", "/products").await;
        assert_eq!(res.header("content-type"), Some("application/json"));

        let items: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(items.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn detail_finds_the_orange() {
        let res = app().route("GET", "/products/2").await;
        let product: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(product["name"], "Orange");
        assert_eq!(product["price"], 2);
    }

    #[tokio::test]
    async fn unknown_id_is_a_domain_miss_not_an_error() {
        let res = app().route("GET", "/products/99").await;
        assert_eq!(res.status_code(), http::StatusCode::OK);
        assert_eq!(
            res.body(),
            br#"{"status":"fail","message":"product not found"}"#
        );
    }

    #[tokio::test]
    async fn non_numeric_id_is_a_domain_miss() {
        let res = app().route("GET", "/products/banana").await;
        assert_eq!(
            res.body(),
            br#"{"status":"fail","message":"product not found"}"#
        );
    }

    #[tokio::test]
    async fn category_match_is_case_insensitive() {
        for path in ["/products/Vehicles/3", "/products/vehicles/3"] {
            let res = app().route("GET", path).await;
            let product: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
            assert_eq!(product["name"], "Subaru Forester");
        }
    }

    #[tokio::test]
    async fn wrong_category_misses_even_with_a_valid_id() {
        let res = app().route("GET", "/products/Fruit/3").await;
        assert_eq!(
            res.body(),
            br#"{"status":"fail","message":"product not found"}"#
        );
    }
}
