use axum::extract::{Extension, Json, Path};

use crate::{
    api::interface::DynAPI,
    catalog::{Animal, CameraPreset},
    entities::CameraOptions,
    error::Error,
};

pub async fn list(Extension(api): Extension<DynAPI>) -> Json<&'static [CameraPreset]> {
    api.camera_presets().into()
}

pub async fn show(
    Extension(api): Extension<DynAPI>,
    Path(name): Path<String>,
) -> Result<Json<CameraOptions>, Error> {
    let camera = api.camera_preset(&name)?;

    Ok(camera.into())
}

pub async fn animals(Extension(api): Extension<DynAPI>) -> Json<&'static [Animal]> {
    api.animals().into()
}

pub async fn animal(
    Extension(api): Extension<DynAPI>,
    Path(name): Path<String>,
) -> Result<Json<CameraOptions>, Error> {
    let camera = api.animal_camera(&name)?;

    Ok(camera.into())
}
