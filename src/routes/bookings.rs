//! Booking route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::Result;
use crate::models::{Booking, BookingRecord, BOOKINGS_COLLECTION};
use crate::requests::parse_booking;
use crate::responses::{BookingResponse, BookingSummaryResponse, TariffsResponse};
use crate::stats;
use crate::AppState;

/// Price and record a new booking
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>)> {
    let Json(body) = payload?;
    let request = parse_booking(&body)?;
    let policy = request.policy.unwrap_or(state.tariff_policy);
    let quote = policy.quote(request.guest_count, request.duration_hours);

    let booking = Booking::priced(
        request.payer_id,
        request.guest_count,
        request.duration_hours,
        &quote,
    );
    let document = state
        .store
        .insert(BOOKINGS_COLLECTION, serde_json::to_value(&booking)?)
        .await?;

    tracing::info!(
        "Recorded booking {} under {} tariff: {} guests x {} + {} fee = {}",
        document.id,
        policy,
        booking.guest_count,
        quote.unit_rate,
        quote.duration_fee,
        quote.total
    );

    let record = BookingRecord {
        id: document.id,
        created_at: document.created_at,
        data: booking,
    };
    Ok((
        StatusCode::CREATED,
        Json(BookingResponse::new(record, state.locale)),
    ))
}

/// Every booking with its formatted total
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<BookingResponse>>> {
    let documents = state.store.get_all(BOOKINGS_COLLECTION).await?;
    let bookings = BookingRecord::decode_all(&documents)
        .into_iter()
        .map(|record| BookingResponse::new(record, state.locale))
        .collect();
    Ok(Json(bookings))
}

/// Guest and hour totals plus duration bucket counts
pub async fn summary(State(state): State<AppState>) -> Result<Json<BookingSummaryResponse>> {
    let documents = state.store.get_all(BOOKINGS_COLLECTION).await?;
    let bookings: Vec<Booking> = BookingRecord::decode_all(&documents)
        .into_iter()
        .map(|record| record.data)
        .collect();

    Ok(Json(stats::summarize_bookings(&bookings).into()))
}

/// Rate tables of every tariff policy
pub async fn tariffs(State(state): State<AppState>) -> Json<TariffsResponse> {
    Json(TariffsResponse::new(state.tariff_policy))
}
