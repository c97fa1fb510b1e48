//! Handlers for the event CRUD endpoints and the event-scoped ticket
//! listing.
//!
//! Validated DTOs arrive through the extractors in [`crate::extract`]; the
//! one deliberate exception is `PUT /{eventId}`, whose body is deserialized
//! but never validated: partial updates accept whatever shape arrives.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tessera_core::types::Timestamp;
use tessera_db::models::{CreateEvent, Event, Ticket, UpdateEvent};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{FallbackMessage, ValidatedJson, ValidatedParams, ValidatedQuery};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the event listing. Validated and echoed back, but
/// never applied as filters.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct EventSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200, message = "name must be at most 200 characters"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200, message = "venue must be at most 200 characters"))]
    pub venue: Option<String>,
}

impl FallbackMessage for EventSearchParams {
    const FALLBACK: &'static str = "Invalid search params";
}

/// Request body for creating an event.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventDto {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,
    #[validate(length(max = 200, message = "venue must be at most 200 characters"))]
    pub venue: Option<String>,
    #[serde(rename = "startsAt")]
    pub starts_at: Option<Timestamp>,
}

impl FallbackMessage for CreateEventDto {
    const FALLBACK: &'static str = "Invalid event create data";
}

impl From<CreateEventDto> for CreateEvent {
    fn from(dto: CreateEventDto) -> Self {
        CreateEvent {
            name: dto.name,
            description: dto.description,
            venue: dto.venue,
            starts_at: dto.starts_at,
        }
    }
}

/// Request body for updating an event. All fields optional; deserialized
/// without validation.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEventDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    #[serde(rename = "startsAt")]
    pub starts_at: Option<Timestamp>,
}

impl From<UpdateEventDto> for UpdateEvent {
    fn from(dto: UpdateEventDto) -> Self {
        UpdateEvent {
            name: dto.name,
            description: dto.description,
            venue: dto.venue,
            starts_at: dto.starts_at,
        }
    }
}

/// Path parameters for the event-scoped ticket listing.
#[derive(Debug, Deserialize, Validate)]
pub struct EventIdParams {
    #[serde(rename = "eventId")]
    #[validate(custom(function = tessera_core::ids::validate_event_id))]
    pub event_id: String,
}

impl FallbackMessage for EventIdParams {
    const FALLBACK: &'static str = "Invalid event id params";
}

/// Path parameters for the delete route.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteEventParams {
    #[serde(rename = "eventId")]
    #[validate(custom(function = tessera_core::ids::validate_event_id))]
    pub event_id: String,
}

impl FallbackMessage for DeleteEventParams {
    const FALLBACK: &'static str = "Invalid delete params";
}

/// Listing response: the standard envelope plus the echoed search params.
#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub message: &'static str,
    pub data: Vec<Event>,
    #[serde(rename = "searchParams")]
    pub search_params: EventSearchParams,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/events
///
/// List all events. Search params are validated and echoed, not applied.
pub async fn list_events(
    State(state): State<AppState>,
    ValidatedQuery(search_params): ValidatedQuery<EventSearchParams>,
) -> AppResult<Json<EventListResponse>> {
    let events = state.events.get_events().await?;
    Ok(Json(EventListResponse {
        message: "Events retrieved successfully",
        data: events,
        search_params,
    }))
}

/// GET /api/events/{eventId}/tickets
///
/// List tickets for an event; an empty collection maps to 404.
pub async fn list_event_tickets(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<EventIdParams>,
) -> AppResult<Json<MessageResponse<Vec<Ticket>>>> {
    let tickets = state
        .tickets
        .get_tickets_by_event_id(&params.event_id)
        .await?;

    if tickets.is_empty() {
        return Err(AppError::NotFound("Tickets not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Tickets retrieved successfully",
        data: tickets,
    }))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateEventDto>,
) -> AppResult<(StatusCode, Json<MessageResponse<Event>>)> {
    let event = state.events.create_event(input.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Events created successfully",
            data: event,
        }),
    ))
}

/// PUT /api/events/{eventId}
///
/// No validation is applied to the body; the raw payload is logged and
/// forwarded as-is.
pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(input): Json<UpdateEventDto>,
) -> AppResult<Json<MessageResponse<Event>>> {
    tracing::debug!(event_id = %event_id, payload = ?input, "update event");

    let event = state
        .events
        .update_event_by_id(&event_id, input.into())
        .await?;

    Ok(Json(MessageResponse {
        message: "Events updated successfully",
        data: event,
    }))
}

/// DELETE /api/events/{eventId}
///
/// Responds 204 with no body whether or not the event existed.
pub async fn delete_event(
    State(state): State<AppState>,
    ValidatedParams(params): ValidatedParams<DeleteEventParams>,
) -> AppResult<StatusCode> {
    state.events.delete_event_by_id(&params.event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
