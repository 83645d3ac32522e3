//! Sales route handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::Result;
use crate::models::{Sale, SaleRecord, SALES_COLLECTION};
use crate::requests::{parse_sale, CategoryQuery, MonthQuery, YearQuery};
use crate::responses::{AveragesResponse, MinByCategoryResponse, MonthSumResponse, PeakMonthResponse};
use crate::stats;
use crate::AppState;

fn sales_of(records: Vec<SaleRecord>) -> Vec<Sale> {
    records.into_iter().map(|record| record.data).collect()
}

/// Record a new sale
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SaleRecord>)> {
    let Json(body) = payload?;
    let sale = parse_sale(&body)?;
    let document = state
        .store
        .insert(SALES_COLLECTION, serde_json::to_value(&sale)?)
        .await?;

    tracing::info!(
        "Recorded sale {} ({} {}-{:02})",
        document.id,
        sale.property_type,
        sale.year,
        sale.month
    );

    Ok((
        StatusCode::CREATED,
        Json(SaleRecord {
            id: document.id,
            created_at: document.created_at,
            data: sale,
        }),
    ))
}

/// Every recorded sale
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SaleRecord>>> {
    let documents = state.store.get_all(SALES_COLLECTION).await?;
    Ok(Json(SaleRecord::decode_all(&documents)))
}

/// Total sales for a month across all years
pub async fn sum(
    State(state): State<AppState>,
    query: std::result::Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<MonthSumResponse>> {
    let Query(query) = query?;
    let month = query.validate()?;
    let documents = state
        .store
        .query_equals(SALES_COLLECTION, "month", json!(month))
        .await?;
    let sales = sales_of(SaleRecord::decode_all(&documents));

    let total = stats::sum_by_month(&sales, month);
    Ok(Json(MonthSumResponse::new(month, total, state.locale)))
}

/// Average price per property type
pub async fn averages(State(state): State<AppState>) -> Result<Json<AveragesResponse>> {
    let documents = state.store.get_all(SALES_COLLECTION).await?;
    let sales = sales_of(SaleRecord::decode_all(&documents));

    Ok(Json(AveragesResponse::new(
        stats::average_by_category(&sales),
        state.locale,
    )))
}

/// Month with the highest total within a year
pub async fn peak_month(
    State(state): State<AppState>,
    query: std::result::Result<Query<YearQuery>, QueryRejection>,
) -> Result<Json<PeakMonthResponse>> {
    let Query(query) = query?;
    let year = query.validate()?;
    let documents = state
        .store
        .query_equals(SALES_COLLECTION, "year", json!(year))
        .await?;
    let sales = sales_of(SaleRecord::decode_all(&documents));

    Ok(Json(PeakMonthResponse::new(
        year,
        stats::peak_month_in_year(&sales, year),
        state.locale,
    )))
}

/// Cheapest sale of a property type.
///
/// Filters after decoding so stored aliases such as `Casa` count as `House`.
pub async fn min_by_category(
    State(state): State<AppState>,
    query: std::result::Result<Query<CategoryQuery>, QueryRejection>,
) -> Result<Json<MinByCategoryResponse>> {
    let Query(query) = query?;
    let category = query.validate()?;
    let documents = state.store.get_all(SALES_COLLECTION).await?;
    let sales = sales_of(SaleRecord::decode_all(&documents));

    Ok(Json(MinByCategoryResponse::new(
        category,
        stats::min_by_category(&sales, category),
        state.locale,
    )))
}
