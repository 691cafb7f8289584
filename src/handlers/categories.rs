use super::common::{success_response, ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::{
    dto::{CreateCategoryRequest, IdPath, MessageResponse, PageQuery, UpdateCategoryRequest},
    errors::ServiceError,
    AppState,
};
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tracing::info;

/// Create a new category
async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let category = state.store.create_category(payload.into()).await?;

    info!(category_id = category.id, "Category created");

    Ok(success_response(category))
}

/// Get a category by ID
async fn get_category(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<IdPath>,
) -> Result<impl IntoResponse, ServiceError> {
    let category = state.store.get_category(path.id).await?;
    Ok(success_response(category))
}

/// List one page of categories
async fn list_categories(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let categories = state.store.list_categories(query.try_into()?).await?;
    Ok(success_response(categories))
}

/// Replace the names of a category
async fn update_category(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<IdPath>,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let category = state
        .store
        .update_category(payload.into_params(path.id))
        .await?;

    info!(category_id = category.id, "Category updated");

    Ok(success_response(category))
}

/// Delete a category
async fn delete_category(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<IdPath>,
) -> Result<impl IntoResponse, ServiceError> {
    state.store.delete_category(path.id).await?;

    info!(category_id = path.id, "Category deleted");

    let message = MessageResponse::new("category deleted successfully");
    Ok(success_response(message))
}

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_category).get(list_categories))
        .route(
            "/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}
