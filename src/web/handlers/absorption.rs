// GET /api/absorption?editionType=limited&editions=50
//
// Returns the weight a collected post of this edition contributes, plus
// its display supply. Unknown edition types follow the configured policy.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::edition::classify_edition;
use crate::error::Error;
use crate::scoring::absorption::absorption_weight_for;
use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AbsorptionQuery {
    /// 1of1 | limited | open | allowlist
    pub edition_type: Option<String>,
    /// Supply count, as sent by the mint form
    pub editions: Option<i64>,
}

pub async fn get_weight(
    State(state): State<AppState>,
    params: Result<Query<AbsorptionQuery>, QueryRejection>,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return api_error(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };

    let Some(edition_type) = params.edition_type.filter(|t| !t.trim().is_empty()) else {
        return api_error(StatusCode::BAD_REQUEST, "Missing editionType");
    };

    let weight = match absorption_weight_for(
        &edition_type,
        params.editions,
        state.config.unknown_edition,
    ) {
        Ok(w) => w,
        Err(e @ Error::InvalidEdition(_)) => {
            return api_error(StatusCode::BAD_REQUEST, &e.to_string());
        }
        Err(e) => {
            tracing::error!(error = %e, "Unexpected error computing absorption weight");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal error");
        }
    };

    // In fallback mode an unknown type still gets a weight, but no supply.
    let total_supply = classify_edition(&edition_type, params.editions)
        .ok()
        .map(|e| e.total_supply(state.config.open_edition_supply));

    Json(serde_json::json!({
        "editionType": edition_type,
        "editions": params.editions,
        "weight": weight,
        "totalSupply": total_supply,
    }))
    .into_response()
}
