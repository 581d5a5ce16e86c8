use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::{info, warn};

use booking_core::Ticket;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ticket", get(list_tickets).post(create_ticket))
        .route("/ticket/{id}", axum::routing::put(update_ticket).delete(delete_ticket))
}

async fn list_tickets(State(state): State<AppState>) -> Json<Vec<Ticket>> {
    Json(state.tickets.list().await)
}

async fn create_ticket(
    State(state): State<AppState>,
    Json(ticket): Json<Ticket>,
) -> Json<Ticket> {
    let created = state.tickets.create(ticket).await;
    info!(id = created.id, flight = %created.flight_name, "ticket created");
    Json(created)
}

// A miss on update or delete is still a 200; clients expect the error
// signalled in the body, not the status code.
async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(ticket): Json<Ticket>,
) -> Response {
    match state.tickets.update(id, ticket).await {
        Ok(updated) => {
            info!(id, "ticket updated");
            Json(updated).into_response()
        }
        Err(err) => {
            warn!(id, %err, "update failed");
            Json(json!({ "error": "Ticket Not Found" })).into_response()
        }
    }
}

async fn delete_ticket(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.tickets.remove(id).await {
        Ok(removed) => {
            info!(id, "ticket deleted");
            Json(removed).into_response()
        }
        Err(err) => {
            warn!(id, %err, "delete failed");
            Json(json!({ "error": "Ticket not found, deletion failed" })).into_response()
        }
    }
}
