//! # HTTP Delivery
//!
//! axum router, shared state, controllers and response envelopes.
//!
//! ## Routes
//! ```text
//! GET    /health
//!
//! /api/v1
//! ├── /uoms        POST  GET(list)  PUT      /uoms/{id}       GET  DELETE
//! ├── /products    POST  GET(list)  PUT      /products/{id}   GET  DELETE
//! ├── /customers   POST  GET(list)  PUT      /customers/{id}  GET  DELETE
//! ├── /employees   POST  GET(list)  PUT      /employees/{id}  GET  DELETE
//! ├── /bills       POST  GET(list)           /bills/{id}      GET
//! ├── /users       POST  GET(list)           /users/{id}      GET
//! └── /auth/login  POST
//! ```

pub mod controller;
pub mod response;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::manager::UseCaseManager;
use controller::{auth, bill, customer, employee, health, product, uom, user};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub usecases: Arc<UseCaseManager>,
}

impl AppState {
    pub fn new(usecases: UseCaseManager) -> Self {
        AppState {
            usecases: Arc::new(usecases),
        }
    }
}

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS; the API sits behind the shop's own front end.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/uoms", post(uom::create).get(uom::list).put(uom::update))
        .route("/uoms/{id}", get(uom::get).delete(uom::delete))
        .route(
            "/products",
            post(product::create).get(product::list).put(product::update),
        )
        .route("/products/{id}", get(product::get).delete(product::delete))
        .route(
            "/customers",
            post(customer::create).get(customer::list).put(customer::update),
        )
        .route("/customers/{id}", get(customer::get).delete(customer::delete))
        .route(
            "/employees",
            post(employee::create).get(employee::list).put(employee::update),
        )
        .route("/employees/{id}", get(employee::get).delete(employee::delete))
        .route("/bills", post(bill::create).get(bill::list))
        .route("/bills/{id}", get(bill::get))
        .route("/users", post(user::create).get(user::list))
        .route("/users/{id}", get(user::get))
        .route("/auth/login", post(auth::login));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_v1)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Router Tests
// =============================================================================
