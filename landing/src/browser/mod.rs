//! Browser glue: file reading, canvas rasterization and downloads.

pub mod download;
pub mod files;
pub mod raster;

use expoten::{BrandConfig, DataUrl, ExportFormat, ExpotenError, ProductPageState, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Render the hero card and download it in `format`.
///
/// `state` is a snapshot taken when the button was clicked.
pub async fn export_card(
    format: ExportFormat,
    hero: HtmlElement,
    state: ProductPageState,
    config: &'static BrandConfig,
) -> Result<()> {
    let export = &config.export;
    let canvas = raster::rasterize_card(
        &hero,
        &state,
        &config.overlay,
        export.scale,
        export.card_radius_px,
        format.background(),
    )
    .await?;

    let jpeg_url = canvas
        .to_data_url_with_type_and_encoder_options(
            "image/jpeg",
            &JsValue::from_f64(format.jpeg_quality(export)),
        )
        .map_err(browser_error)?;

    let filename = format.filename(export);
    match format {
        ExportFormat::Jpg => download::download_url(&jpeg_url, filename)?,
        ExportFormat::Pdf => {
            let jpeg = DataUrl::parse(&jpeg_url)?;
            let pdf = expoten::write_pdf(
                &jpeg.bytes,
                canvas.width(),
                canvas.height(),
                &config.brand.name,
                export,
            )?;
            download::download_bytes(&pdf, format.mime(), filename)?;
        }
    }

    tracing::info!(
        file = filename,
        width = canvas.width(),
        height = canvas.height(),
        "card exported"
    );
    Ok(())
}

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExpotenError::Browser("no document".into()))
}

pub fn browser_error(value: JsValue) -> ExpotenError {
    ExpotenError::Browser(describe_js(&value))
}

pub fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
