use super::common::{success_response, ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::{
    dto::{CreateUnitRequest, IdPath, MessageResponse, PageQuery, UpdateUnitRequest},
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

async fn create_unit(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUnitRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let unit = state.store.create_unit(payload.into_params()?).await?;

    info!(unit_id = unit.id, "Unit created");

    Ok(success_response(unit))
}

async fn get_unit(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<IdPath>,
) -> Result<impl IntoResponse, ServiceError> {
    let unit = state.store.get_unit(path.id).await?;
    Ok(success_response(unit))
}

async fn list_units(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let units = state.store.list_units(query.try_into()?).await?;
    Ok(success_response(units))
}

async fn update_unit(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<IdPath>,
    ValidatedJson(payload): ValidatedJson<UpdateUnitRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let unit = state
        .store
        .update_unit(payload.into_params(path.id)?)
        .await?;

    info!(unit_id = unit.id, "Unit updated");

    Ok(success_response(unit))
}

async fn delete_unit(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<IdPath>,
) -> Result<impl IntoResponse, ServiceError> {
    state.store.delete_unit(path.id).await?;

    info!(unit_id = path.id, "Unit deleted");

    let message = MessageResponse::new("unit deleted successfully");
    Ok(success_response(message))
}

pub fn unit_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_unit).get(list_units))
        .route("/:id", get(get_unit).put(update_unit).delete(delete_unit))
}
