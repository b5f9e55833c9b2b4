//! Uploaded files to `data:` URLs.

use expoten::{ExpotenError, Result, data_url};
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

use super::describe_js;

/// Files currently selected in `input`, in selection order.
///
/// The input is reset afterwards so picking the same file again fires `change`.
pub fn take_files(input: NodeRef<Input>) -> Vec<File> {
    let Some(input) = input.get() else {
        return Vec::new();
    };
    let files = input.files().map(|f| file_list_to_vec(&f)).unwrap_or_default();
    input.set_value("");
    files
}

fn file_list_to_vec(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

pub async fn read_as_data_url(file: File) -> Result<String> {
    let name = file.name();
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ExpotenError::FileRead {
            name: name.clone(),
            reason: describe_js(&e),
        })?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime = data_url::mime_for(&file.type_(), &name);
    tracing::debug!(file = %name, %mime, bytes = bytes.len(), "file read");
    Ok(data_url::encode(&mime, &bytes))
}

/// Read every file; results keep the input order. Fails if any read fails.
pub async fn read_all(files: Vec<File>) -> Result<Vec<String>> {
    futures::future::try_join_all(files.into_iter().map(read_as_data_url)).await
}
