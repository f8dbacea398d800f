// GET /api/prices: the active reaction price table.
//
// Amounts are wei as decimal strings, plus an ETH rendering for display.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::web::AppState;

pub async fn get_prices(State(state): State<AppState>) -> impl IntoResponse {
    let mut prices = serde_json::Map::new();
    let mut eth = serde_json::Map::new();
    for (kind, price) in state.config.prices.entries() {
        prices.insert(kind.as_str().to_string(), price.to_string().into());
        eth.insert(kind.as_str().to_string(), price.to_eth_string().into());
    }
    prices.insert("eth".to_string(), serde_json::Value::Object(eth));

    Json(serde_json::Value::Object(prices))
}
