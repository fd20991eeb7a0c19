use axum::extract::{Extension, Json};

use crate::api::{EstimateAPI, EstimateRequest};
use crate::entities::{ServiceArea, TripEstimate};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<EstimateRequest>,
) -> Result<Json<TripEstimate>, Error> {
    let estimate = api.create_estimate(params).await?;

    Ok(estimate.into())
}

pub async fn service_area(Extension(api): Extension<DynAPI>) -> Json<ServiceArea> {
    api.service_area().into()
}
