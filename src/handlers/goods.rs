use super::common::{success_response, ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::{
    dto::{CreateGoodRequest, IdPath, ListGoodsQuery, MessageResponse, UpdateGoodRequest},
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

/// Create a new good
///
/// The referenced category and unit are not looked up first; a dangling
/// reference is rejected by the store.
async fn create_good(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateGoodRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let good = state.store.create_good(payload.into_params()?).await?;

    info!(good_id = good.id, category = good.category, "Good created");

    Ok(success_response(good))
}

async fn get_good(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<IdPath>,
) -> Result<impl IntoResponse, ServiceError> {
    let good = state.store.get_good(path.id).await?;
    Ok(success_response(good))
}

/// List one page of the goods in a category
async fn list_goods(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListGoodsQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let goods = state.store.list_goods(query.into_params()?).await?;
    Ok(success_response(goods))
}

/// Change the unit and amount of a good
async fn update_good(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<IdPath>,
    ValidatedJson(payload): ValidatedJson<UpdateGoodRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let good = state.store.update_good(payload.into_params(path.id)?).await?;

    info!(good_id = good.id, amount = good.amount, "Good updated");

    Ok(success_response(good))
}

async fn delete_good(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<IdPath>,
) -> Result<impl IntoResponse, ServiceError> {
    state.store.delete_good(path.id).await?;

    info!(good_id = path.id, "Good deleted");

    let message = MessageResponse::new("good deleted successfully");
    Ok(success_response(message))
}

pub fn good_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_good).get(list_goods))
        .route("/:id", get(get_good).put(update_good).delete(delete_good))
}
