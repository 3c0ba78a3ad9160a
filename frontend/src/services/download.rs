use anyhow::{anyhow, Context};
use gloo::file::{Blob, ObjectUrl};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// How long the object URL outlives the click that starts the download.
const REVOKE_AFTER_MS: u32 = 1_000;

/// Hand `bytes` to the browser as a file download named `filename`.
pub fn save_bytes(bytes: &[u8], filename: &str, mime_type: &str) -> anyhow::Result<()> {
    let blob = Blob::new_with_options(bytes, Some(mime_type));
    let url = ObjectUrl::from(blob);

    let document = gloo::utils::document();
    let body = document.body().context("document has no body")?;
    let anchor = document
        .create_element("a")
        .map_err(|e| anyhow!("creating download link: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| anyhow!("download link is not an anchor"))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)
        .map_err(|e| anyhow!("attaching download link: {:?}", e))?;
    anchor.click();
    anchor.remove();

    // Dropping the ObjectUrl revokes it.
    Timeout::new(REVOKE_AFTER_MS, move || drop(url)).forget();
    Ok(())
}
