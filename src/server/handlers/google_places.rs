use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::api::LocationAPI;
use crate::entities::PlaceSuggestion;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct FindSuggestionsParams {
    input: String,
    session_token: Option<String>,
}

pub async fn find_suggestions(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<FindSuggestionsParams>,
) -> Result<Json<Vec<PlaceSuggestion>>, Error> {
    let suggestions = api
        .find_place_suggestions(params.input, params.session_token)
        .await?;

    Ok(suggestions.into())
}
