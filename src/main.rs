//! Demo server: product catalog and event listings on port 8000.
//!
//! Try:
//!   curl http://localhost:8000/
//!   curl http://localhost:8000/products
//!   curl http://localhost:8000/products/2
//!   curl http://localhost:8000/products/vehicles/3
//!   curl http://localhost:8000/events/1

use ruta::{Request, Response, Router, Server, catalog, events};

const PORT: u16 = 8000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Order is priority: the first structurally matching template wins.
    let app = Router::new()
        .on("/", home)
        .on("/products", catalog::list)
        .on("/products/:productId", catalog::detail)
        .on("/products/:category/:productId", catalog::detail_in_category)
        .on("/events", events::list)
        .on("/events/:eventId", events::detail);

    Server::bind(&format!("0.0.0.0:{PORT}"))
        .serve(app)
        .await
        .expect("server error");
}

// GET / — plain body, deliberately no content-type header.
async fn home(_req: Request) -> Response {
    Response::raw("Home Page")
}
