//! HTTP routes: `GET /quotes` returns the whole list, everything else is a 404.
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use log::debug;
use quote_common::QuoteList;
use quote_common::net::QUOTES_PATH;

use crate::store::QuoteStore;

pub fn router(store: Arc<QuoteStore>) -> Router {
    Router::new()
        .route(QUOTES_PATH, get(list_quotes))
        .with_state(store)
}

async fn list_quotes(State(store): State<Arc<QuoteStore>>) -> Json<QuoteList> {
    debug!("Serving {} quotes", store.quotes().len());
    Json(store.quotes().to_vec())
}
