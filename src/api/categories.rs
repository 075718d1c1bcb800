use axum::extract::{Path, State};
use axum::Json;

use crate::api::AppState;
use crate::domain::Category;
use crate::error::AppError;

pub async fn create_category(
    State(state): State<AppState>,
    Json(category): Json<Category>,
) -> Result<Json<Category>, AppError> {
    let created = state.repo.create_category(&category).await?;
    Ok(Json(created))
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state.repo.list_categories().await?;
    Ok(Json(categories))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<Json<Category>, AppError> {
    let category = state
        .repo
        .get_category(category_id)
        .await?
        .ok_or_else(AppError::category_not_found)?;
    Ok(Json(category))
}

/// Only `name` from the body is applied. The body's `id` field is validated
/// for shape parity with create but never used: the path id alone drives the
/// lookup, and the stored primary key does not change.
pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Json(body): Json<Category>,
) -> Result<Json<Category>, AppError> {
    let updated = state
        .repo
        .rename_category(category_id, &body.name)
        .await?
        .ok_or_else(AppError::category_not_found)?;
    Ok(Json(updated))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<Json<Category>, AppError> {
    let deleted = state
        .repo
        .delete_category(category_id)
        .await?
        .ok_or_else(AppError::category_not_found)?;
    Ok(Json(deleted))
}
