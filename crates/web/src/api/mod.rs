use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::{get, on},
    Json, Router,
};
use directions::estimate::estimate_route;
use model::route::{Coordinates, RouteEstimate};
use serde::Deserialize;
use serde_json::json;

use crate::{
    common::{route_not_found, schema, RouteErrorResponse, RouteResult, METHOD_FILTER_ALL},
    WebState,
};

pub fn routes(state: WebState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/route", get(route))
        .route("/route/schema", get(schema::<RouteEstimate>))
        .route("/realroute", get(realroute))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn ping() -> impl IntoResponse {
    Json(json!({
        "message": "pong!"
    }))
}

/// Query parameters arrive as raw strings so that a missing or garbled
/// value maps to the JSON error envelope instead of a query-rejection.
#[derive(Debug, Deserialize)]
pub(crate) struct RouteQuery {
    from_lat: Option<String>,
    from_lng: Option<String>,
    to_lat: Option<String>,
    to_lng: Option<String>,
}

impl RouteQuery {
    fn coordinates(&self) -> Result<(Coordinates, Coordinates), RouteErrorResponse> {
        let from = Coordinates::new(
            parse_coordinate(self.from_lat.as_deref())?,
            parse_coordinate(self.from_lng.as_deref())?,
        );
        let to = Coordinates::new(
            parse_coordinate(self.to_lat.as_deref())?,
            parse_coordinate(self.to_lng.as_deref())?,
        );
        Ok((from, to))
    }
}

fn parse_coordinate(raw: Option<&str>) -> Result<f64, RouteErrorResponse> {
    raw.and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| RouteErrorResponse::bad_request("Missing coordinates"))
}

async fn route(
    Query(params): Query<RouteQuery>,
) -> RouteResult<Json<RouteEstimate>> {
    let (from, to) = params.coordinates()?;
    Ok(Json(estimate_route(from, to)))
}

/// Pass-through to the external routing provider. Parameter validation
/// happens before any upstream contact.
async fn realroute(
    State(WebState {
        directions_client, ..
    }): State<WebState>,
    Query(params): Query<RouteQuery>,
) -> RouteResult<Json<serde_json::Value>> {
    let (from, to) = params.coordinates()?;

    let body = directions_client.directions(from, to).await.map_err(|why| {
        log::error!("Routing provider request failed: {}", why);
        RouteErrorResponse::from(why)
    })?;

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_and_garbled_coordinates() {
        assert!(parse_coordinate(None).is_err());
        assert!(parse_coordinate(Some("")).is_err());
        assert!(parse_coordinate(Some("north")).is_err());
        assert!(parse_coordinate(Some("NaN")).is_err());
        assert_eq!(parse_coordinate(Some("54.3233")).unwrap(), 54.3233);
        assert_eq!(parse_coordinate(Some("-10.5")).unwrap(), -10.5);
    }
}
