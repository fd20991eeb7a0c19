use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::LocationAPI;
use crate::entities::{Location, LocationSource};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    source: LocationSource,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Location>, Error> {
    let location = api.create_location(params.source).await?;

    Ok(location.into())
}
