use axum::extract::{Extension, Json};

use crate::api::interface::{DynAPI, Icon, MapSnapshot};

pub async fn show(Extension(api): Extension<DynAPI>) -> Json<MapSnapshot> {
    api.map().await.into()
}

pub async fn icons(Extension(api): Extension<DynAPI>) -> Json<Vec<Icon>> {
    api.icons().into()
}
