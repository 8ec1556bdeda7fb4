use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use time::Date;
use tracing::{info, instrument};

use super::dto::SalePayload;
use super::repo_types::{Sale, SaleView};
use crate::{
    auth::extractors::AuthUser, error::ApiError, response::ApiResponse, state::AppState,
};

pub fn sale_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_sale).get(list_sales))
        .route("/:id", get(get_sale).put(update_sale).delete(delete_sale))
        .route("/client/:client_id", get(get_sales_by_client))
}

/// Boundary validation for create and replace. Presence and positivity only;
/// whether the client row is live is left to the foreign key.
fn validate_sale_fields(payload: &SalePayload) -> Result<(i32, Decimal, Date), ApiError> {
    let (Some(client_id), Some(amount), Some(sale_date)) =
        (payload.client_id, payload.amount, payload.sale_date)
    else {
        return Err(ApiError::Validation(
            "client_id, amount and sale_date are required".into(),
        ));
    };

    if amount <= Decimal::ZERO {
        return Err(ApiError::Validation(
            "amount must be greater than zero".into(),
        ));
    }

    Ok((client_id, amount, sale_date))
}

#[instrument(skip(state, user, payload))]
pub async fn create_sale(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SalePayload>,
) -> Result<(StatusCode, Json<ApiResponse<Sale>>), ApiError> {
    let (client_id, amount, sale_date) = validate_sale_fields(&payload)?;

    let sale = Sale::create(
        &state.db,
        client_id,
        amount,
        sale_date,
        payload.description.as_deref(),
        user.id,
    )
    .await?;

    info!(sale_id = sale.id, client_id, created_by = user.id, "sale created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            "sale created successfully",
            sale,
        )),
    ))
}

#[instrument(skip(state, _user))]
pub async fn list_sales(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<ApiResponse<Vec<SaleView>>>, ApiError> {
    let sales = Sale::find_all(&state.db).await?;
    Ok(Json(ApiResponse::success(sales)))
}

#[instrument(skip(state, _user))]
pub async fn get_sale(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<SaleView>>, ApiError> {
    let sale = Sale::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("sale not found".into()))?;
    Ok(Json(ApiResponse::success(sale)))
}

#[instrument(skip(state, _user))]
pub async fn get_sales_by_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<SaleView>>>, ApiError> {
    let sales = Sale::find_by_client_id(&state.db, client_id).await?;
    Ok(Json(ApiResponse::success(sales)))
}

#[instrument(skip(state, _user, payload))]
pub async fn update_sale(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<SalePayload>,
) -> Result<Json<ApiResponse<Sale>>, ApiError> {
    let (client_id, amount, sale_date) = validate_sale_fields(&payload)?;

    let sale = Sale::update(
        &state.db,
        id,
        client_id,
        amount,
        sale_date,
        payload.description.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("sale not found".into()))?;

    info!(sale_id = sale.id, "sale updated");
    Ok(Json(ApiResponse::success_with_message(
        "sale updated successfully",
        sale,
    )))
}

#[instrument(skip(state, _user))]
pub async fn delete_sale(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !Sale::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("sale not found".into()));
    }

    info!(sale_id = id, "sale deleted");
    Ok(Json(ApiResponse::message("sale deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn payload(client_id: Option<i32>, amount: Option<Decimal>, sale_date: Option<Date>) -> SalePayload {
        SalePayload {
            client_id,
            amount,
            sale_date,
            description: None,
        }
    }

    #[test]
    fn accepts_positive_amount() {
        let p = payload(Some(1), Some(Decimal::new(15050, 2)), Some(date!(2024 - 01 - 15)));
        let (client_id, amount, _) = validate_sale_fields(&p).expect("valid");
        assert_eq!(client_id, 1);
        assert_eq!(amount, Decimal::new(15050, 2));
    }

    #[test]
    fn rejects_missing_required_fields() {
        assert!(validate_sale_fields(&payload(None, Some(Decimal::ONE), Some(date!(2024 - 01 - 15)))).is_err());
        assert!(validate_sale_fields(&payload(Some(1), None, Some(date!(2024 - 01 - 15)))).is_err());
        assert!(validate_sale_fields(&payload(Some(1), Some(Decimal::ONE), None)).is_err());
    }

    #[test]
    fn rejects_zero_amount() {
        let p = payload(Some(1), Some(Decimal::ZERO), Some(date!(2024 - 01 - 15)));
        let err = validate_sale_fields(&p).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn rejects_negative_amount() {
        let p = payload(Some(1), Some(Decimal::new(-5, 0)), Some(date!(2024 - 01 - 15)));
        assert!(validate_sale_fields(&p).is_err());
    }
}
