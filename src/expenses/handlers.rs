use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{ExpenseCreated, ExpenseInput, ExpenseMessage};
use super::repo_types::Expense;
use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add-expense", post(add_expense))
        .route("/expenses", get(list_expenses))
        .route("/update-expense/:id", put(update_expense))
        .route("/delete-expense/:id", delete(delete_expense))
        .route("/last-expense", get(last_expense))
}

fn validated(input: &ExpenseInput) -> Result<(&str, f64), ApiError> {
    let title = input.title.trim();
    match input.amount {
        Some(amount) if !title.is_empty() => Ok((title, amount)),
        _ => Err(ApiError::Validation("Title and Amount are required")),
    }
}

#[instrument(skip(state, claims, payload), fields(user_id = %claims.sub))]
pub async fn add_expense(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<ExpenseInput>,
) -> Result<(StatusCode, Json<ExpenseCreated>), ApiError> {
    let (title, amount) = validated(&payload)?;

    let expense = Expense::create(&state.db, claims.sub, title, amount, payload.quantity).await?;

    info!(expense_id = %expense.id, "expense added");
    Ok((
        StatusCode::CREATED,
        Json(ExpenseCreated {
            message: "Expense added successfully!",
            insert_id: expense.id,
        }),
    ))
}

#[instrument(skip(state, claims), fields(user_id = %claims.sub))]
pub async fn list_expenses(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = Expense::list_by_owner(&state.db, claims.sub).await?;
    Ok(Json(expenses))
}

#[instrument(skip(state, claims, payload), fields(user_id = %claims.sub))]
pub async fn update_expense(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ExpenseInput>,
) -> Result<Json<ExpenseMessage>, ApiError> {
    let (title, amount) = validated(&payload)?;

    // Zero rows touched (wrong owner or unknown id) is still a 200.
    Expense::update(&state.db, id, claims.sub, title, amount, payload.quantity).await?;

    Ok(Json(ExpenseMessage {
        message: "Expense updated successfully",
    }))
}

#[instrument(skip(state, claims), fields(user_id = %claims.sub))]
pub async fn delete_expense(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpenseMessage>, ApiError> {
    Expense::delete(&state.db, id, claims.sub).await?;

    Ok(Json(ExpenseMessage {
        message: "Expense deleted successfully",
    }))
}

#[instrument(skip(state, claims), fields(user_id = %claims.sub))]
pub async fn last_expense(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Option<Expense>>, ApiError> {
    let expense = Expense::most_recent(&state.db, claims.sub).await?;
    Ok(Json(expense))
}
