use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ModelList {
    pub object: &'static str,
    pub data: Vec<ModelObject>,
}

#[derive(Debug, Serialize)]
pub struct ModelObject {
    pub id: &'static str,
    pub object: &'static str,
    pub owned_by: &'static str,
}

pub async fn list_models(State(state): State<AppState>) -> Json<ModelList> {
    let data = state
        .usecase
        .models()
        .into_iter()
        .map(|model| ModelObject {
            id: model.as_str(),
            object: "model",
            owned_by: "cloudflare",
        })
        .collect();

    Json(ModelList {
        object: "list",
        data,
    })
}
