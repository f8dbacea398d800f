// POST /api/react: gate a paid reaction on the price table.
//
// Body: { postId, actorId, kind, commentText?, amountWei? }
//
// Ids may be strings or numbers. amountWei is a decimal string (JSON
// integers are tolerated) and defaults to "0" when missing or empty. The
// kind is checked before the amount, so an unknown kind is reported as
// such whatever amount came with it. On success the validated reaction is
// echoed back for the caller to persist; this server stores nothing.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::Error;
use crate::reactions::amount::Wei;
use crate::reactions::validator::ReactionAttempt;
use crate::reactions::ReactionKind;
use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReactRequest {
    pub post_id: Option<Value>,
    pub actor_id: Option<Value>,
    pub kind: Option<Value>,
    pub comment_text: Option<Value>,
    pub amount_wei: Option<Value>,
}

/// A required field is present when it's a non-empty string or a number.
fn required_field(field: Option<Value>) -> Option<String> {
    match field? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Missing, null and "" all mean no payment was offered.
fn parse_amount(raw: Option<Value>) -> Result<Wei, String> {
    match raw {
        None | Some(Value::Null) => Ok(Wei::ZERO),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(Wei::ZERO),
        Some(raw) => serde_json::from_value::<Wei>(raw).map_err(|e| e.to_string()),
    }
}

pub async fn create_reaction(
    State(state): State<AppState>,
    body: Result<Json<ReactRequest>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => return api_error(rejection.status(), &rejection.body_text()),
    };

    let (Some(post_id), Some(actor_id), Some(kind)) = (
        required_field(body.post_id),
        required_field(body.actor_id),
        required_field(body.kind),
    ) else {
        return api_error(StatusCode::BAD_REQUEST, "Missing required fields");
    };

    let kind: ReactionKind = match kind.parse() {
        Ok(k) => k,
        Err(e) => {
            warn!(post_id = %post_id, kind = %kind, "Reaction rejected: unknown kind");
            return api_error(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    let offered = match parse_amount(body.amount_wei) {
        Ok(w) => w,
        Err(e) => return api_error(StatusCode::BAD_REQUEST, &format!("Invalid amountWei: {e}")),
    };

    let comment_text = body
        .comment_text
        .and_then(|v| v.as_str().map(str::to_string));

    match ReactionAttempt::new(kind, offered).validate(&state.config.prices) {
        Ok(reaction) => {
            info!(
                post_id = %post_id,
                actor_id = %actor_id,
                kind = %reaction.kind,
                amount = %reaction.offered,
                "Reaction accepted"
            );
            Json(serde_json::json!({
                "reaction": {
                    "postId": post_id,
                    "actorId": actor_id,
                    "kind": reaction.kind,
                    "commentText": comment_text,
                    "amountWei": reaction.offered,
                    "requiredWei": reaction.required,
                }
            }))
            .into_response()
        }
        Err(Error::InsufficientPayment {
            kind,
            required,
            offered,
        }) => {
            warn!(
                post_id = %post_id,
                kind = %kind,
                required = %required,
                offered = %offered,
                "Reaction rejected: insufficient payment"
            );
            api_error(StatusCode::BAD_REQUEST, "Insufficient payment for reaction")
        }
        Err(e) => api_error(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}
