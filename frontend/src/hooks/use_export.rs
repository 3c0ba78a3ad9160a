use chrono::NaiveDate;
use shared::{export_filename, ExportFormat, Selection};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::download::save_bytes;
use crate::services::logging::Logger;

pub struct UseExportResult {
    /// Format currently being downloaded, if any
    pub exporting: Option<ExportFormat>,
    pub export: Callback<ExportFormat>,
}

/// Download the current selection as a backend-rendered file. Failures only
/// reach the console.
#[hook]
pub fn use_export(api_client: &ApiClient, selection: &Selection) -> UseExportResult {
    let exporting = use_state(|| Option::<ExportFormat>::None);

    let export = {
        let api_client = api_client.clone();
        let exporting = exporting.clone();

        use_callback(
            (selection.officer.clone(), selection.date),
            move |format: ExportFormat, (officer, date): &(String, NaiveDate)| {
                let api_client = api_client.clone();
                let exporting = exporting.clone();
                let officer = officer.clone();
                let date = *date;

                exporting.set(Some(format));
                spawn_local(async move {
                    let filename = export_filename(&officer, date, format);
                    let result = match api_client.download_export(format, &officer, date).await {
                        Ok(bytes) => save_bytes(&bytes, &filename, format.mime_type()),
                        Err(e) => Err(e),
                    };

                    match result {
                        Ok(()) => Logger::info_with_component(
                            "export",
                            &format!("Saved {}", filename),
                        ),
                        Err(e) => Logger::error_with_component(
                            "export",
                            &format!("Export {} failed: {:#}", filename, e),
                        ),
                    }
                    exporting.set(None);
                });
            },
        )
    };

    UseExportResult {
        exporting: *exporting,
        export,
    }
}
