//! HTTP handlers.
//!
//! `/api/order` answers both POST (JSON body) and GET (query string). The GET
//! path is there so a third party can place an order as the side effect of an
//! `<img>` load, and the clear endpoint is a side-effecting GET for the same
//! reason. Caller-supplied values are echoed into the response bodies without
//! escaping. All of this is the vulnerability being demonstrated, not an
//! oversight.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{error::AppError, orders::Order, state::AppState};

#[derive(Deserialize)]
pub struct OrderFields {
    pub name: Option<String>,
    pub coffee: Option<String>,
}

/// Which surface an order arrived on. Both variants feed the same append
/// routine; only the response shape differs.
pub enum OrderInput {
    FromBody(OrderFields),
    FromQuery(OrderFields),
}

impl OrderInput {
    fn fields(&self) -> &OrderFields {
        match self {
            Self::FromBody(fields) | Self::FromQuery(fields) => fields,
        }
    }

    fn method(&self) -> &'static str {
        match self {
            Self::FromBody(_) => "POST",
            Self::FromQuery(_) => "GET",
        }
    }
}

pub async fn orders_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.orders.list()?))
}

pub async fn order_body_handler(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<OrderFields>,
) -> Result<Response, AppError> {
    place_order(&state, OrderInput::FromBody(fields))
}

pub async fn order_query_handler(
    State(state): State<Arc<AppState>>,
    Query(fields): Query<OrderFields>,
) -> Result<Response, AppError> {
    place_order(&state, OrderInput::FromQuery(fields))
}

fn place_order(state: &AppState, input: OrderInput) -> Result<Response, AppError> {
    let fields = input.fields();
    let name = fields.name.clone().unwrap_or_default();
    let coffee = fields.coffee.clone().unwrap_or_default();

    state.orders.append(Order {
        name: fields.name.clone(),
        coffee: fields.coffee.clone(),
    })?;

    info!("New {} order: {name} ordered {coffee}", input.method());

    Ok(match input {
        OrderInput::FromBody(_) => Json(json!({
            "message": format!("{name}'s order for {coffee} has been placed!"),
        }))
        .into_response(),
        // Interpolated straight into markup, unescaped (reflected XSS).
        OrderInput::FromQuery(_) => Html(format!(
            "<p>{name}'s order for {coffee} has been received!</p>"
        ))
        .into_response(),
    })
}

pub async fn clear_orders_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    state.orders.clear()?;

    info!("All orders cleared!");

    Ok(Json(json!({ "message": "All orders have been cleared!" })))
}
