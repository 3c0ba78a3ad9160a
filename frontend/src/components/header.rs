use shared::ExportFormat;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Week label of the snapshot on screen
    pub last_updated: String,
    pub backend_unavailable: bool,
    pub loading: bool,
    pub exporting: Option<ExportFormat>,
    pub on_export: Callback<ExportFormat>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <div class="header-left">
                    <h1>{"PAR Analytics Dashboard"}</h1>
                    <div class="header-meta">
                        <span class="last-updated">{format!("Last updated: {}", props.last_updated)}</span>
                        {if props.loading {
                            html! { <span class="loading-indicator">{"Refreshing..."}</span> }
                        } else { html! {} }}
                        {if props.backend_unavailable {
                            html! { <span class="backend-offline">{"backend offline - showing fallback data"}</span> }
                        } else { html! {} }}
                    </div>
                </div>
                <div class="export-buttons">
                    {for ExportFormat::ALL.iter().map(|&format| {
                        let on_export = props.on_export.clone();
                        let busy = props.exporting == Some(format);
                        html! {
                            <button
                                class={classes!("export-button", format.query_value())}
                                disabled={busy}
                                onclick={Callback::from(move |_: MouseEvent| on_export.emit(format))}
                            >
                                {if busy { "Exporting...".to_string() } else { format.label().to_string() }}
                            </button>
                        }
                    })}
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_offline_badge_only_when_backend_unavailable() {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();

        let props = HeaderProps {
            last_updated: "20 Sep".to_string(),
            backend_unavailable: true,
            loading: false,
            exporting: None,
            on_export: Callback::noop(),
        };
        yew::Renderer::<Header>::with_root_and_props(root.clone(), props).render();
        gloo::timers::future::TimeoutFuture::new(10).await;

        assert!(root.query_selector(".backend-offline").unwrap().is_some());
        assert_eq!(root.query_selector_all(".export-button").unwrap().length(), 3);
        assert!(root.inner_html().contains("Last updated: 20 Sep"));
    }
}
