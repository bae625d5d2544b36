/// Saves `csv_data` through a temporary object URL and a hidden anchor.
#[cfg(target_arch = "wasm32")]
pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(csv_data));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "Failed to create blob".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let anchor = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.set_attribute("style", "display: none");
    document
        .body()
        .ok_or("No body")?
        .append_child(&anchor)
        .map_err(|_| "Append failed".to_string())?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_csv_download(filename: &str, _csv_data: &str) -> Result<(), String> {
    Err(format!("Downloading {} requires a browser", filename))
}

/// File name for an export, e.g. `tasks_export_2025-03-05.csv`.
pub fn export_filename(prefix: &str, date: chrono::NaiveDate) -> String {
    format!("{}_export_{}.csv", prefix, date.format("%Y-%m-%d"))
}
