//! Payoff calculation endpoint
//!
//! Translates a strategy descriptor (named strategy plus parameter bag, or
//! explicit custom legs) into a leg list and returns the payoff curve, the
//! break-even prices, and the realised-P&L report when exit data is present.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use payoff_core::types::{Leg, PayoffCurve};
use payoff_engine::exit::{self, ExitPnlReport};
use payoff_engine::break_even;
use payoff_strategies::{build_legs, ParamBag, StrategyKind};

use super::{AppState, ErrorResponse};

/// Payoff calculation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffRequest {
    /// Strategy identifier (`covered-call`, `custom-strategy`, ...)
    pub strategy_type: String,
    /// Named-strategy parameter bag
    #[serde(default)]
    pub parameters: ParamBag,
    /// Explicit legs for a custom strategy
    #[serde(default)]
    pub custom_legs: Vec<Leg>,
    /// Underlying price anchoring defaults and the window override
    #[serde(default)]
    pub underlying_price: Option<f64>,
    /// Percent half-width of the explicit scan window; when absent the
    /// window is derived from the legs' own prices
    #[serde(default)]
    pub price_range_percent: Option<f64>,
    /// Entry date, inert pass-through
    #[serde(default)]
    pub entry_date: Option<String>,
    /// Expiry date, inert pass-through
    #[serde(default)]
    pub expiry_date: Option<String>,
}

/// Payoff calculation response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffResponse {
    /// Ordered (price, pnl) curve for charting
    pub curve: PayoffCurve,
    /// Interpolated break-even prices, ascending
    pub break_evens: Vec<f64>,
    /// Realised P&L, present only when some leg carries an exit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_pnl: Option<ExitPnlReport>,
}

/// Build the payoff routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/payoff/calculate", post(calculate_handler))
}

/// POST /api/v1/payoff/calculate - Calculate a payoff curve
async fn calculate_handler(
    State(state): State<AppState>,
    Json(request): Json<PayoffRequest>,
) -> Response {
    let kind = match request.strategy_type.parse::<StrategyKind>() {
        Ok(kind) => kind,
        Err(err) => {
            let response = ErrorResponse {
                error: "unknown_strategy".to_string(),
                message: err.to_string(),
            };
            return (StatusCode::BAD_REQUEST, Json(response)).into_response();
        }
    };

    let underlying = request
        .underlying_price
        .unwrap_or(state.config.default_underlying_price);

    let legs = if kind == StrategyKind::CustomStrategy {
        request.custom_legs
    } else {
        build_legs(kind, &request.parameters, underlying)
    };

    let curve = match request.price_range_percent {
        Some(percent) => state.builder.build_with_window(&legs, underlying, percent),
        None => state.builder.build(&legs),
    };
    let decimals = state.builder.config().price_decimals;
    let break_evens = break_even::scan(&curve, decimals);
    let report = exit::realised(&legs, decimals);

    tracing::debug!(
        strategy = %kind,
        legs = legs.len(),
        points = curve.len(),
        break_evens = break_evens.len(),
        "payoff calculated"
    );

    let response = PayoffResponse {
        curve,
        break_evens,
        exit_pnl: (!report.is_empty()).then_some(report),
    };
    (StatusCode::OK, Json(response)).into_response()
}
