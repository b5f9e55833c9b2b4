use expoten::{ExpotenError, Result};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::{browser_error, document};

/// Trigger a download of `href` through a hidden anchor.
pub fn download_url(href: &str, filename: &str) -> Result<()> {
    let doc = document()?;
    let anchor: HtmlAnchorElement = doc
        .create_element("a")
        .map_err(browser_error)?
        .dyn_into()
        .map_err(|_| ExpotenError::Browser("created element is not an anchor".into()))?;
    anchor.set_href(href);
    anchor.set_download(filename);
    let _ = anchor.set_attribute("style", "display:none;");

    let body = doc
        .body()
        .ok_or_else(|| ExpotenError::Browser("no document body".into()))?;
    body.append_child(&anchor).map_err(browser_error)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

/// Download raw bytes via a temporary object URL.
pub fn download_bytes(bytes: &[u8], mime: &str, filename: &str) -> Result<()> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(browser_error)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(browser_error)?;
    let result = download_url(&url, filename);
    let _ = Url::revoke_object_url(&url);
    result
}
