use shared::{DashboardConfig, KpiSummary};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::controls::Controls;
use components::header::Header;
use components::kpi_cards::KpiCards;
use components::officer_details::OfficerDetailsPanel;
use components::par_chart::ParChart;
use components::weekly_table::WeeklyTable;
use hooks::use_export::use_export;
use hooks::use_par_data::use_par_data;
use services::api::ApiClient;

/// API base baked in at build time, e.g. `PAR_API_BASE=https://par.example.com trunk build`.
const API_BASE_OVERRIDE: Option<&str> = option_env!("PAR_API_BASE");

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| DashboardConfig::with_override(API_BASE_OVERRIDE));
    let api_client = {
        let config = config.clone();
        use_memo((), move |_| ApiClient::from_config(&config))
    };

    let par_data = use_par_data(&api_client);
    let state = par_data.state;
    let actions = par_data.actions;
    let export = use_export(&api_client, &state.selection);

    let view = state.view.clone();
    let summary = KpiSummary::from_view(&view);
    let prefix = config.currency_prefix.clone();

    html! {
        <div class="app">
            <Header
                last_updated={view.snapshot.week.clone()}
                backend_unavailable={state.backend_unavailable}
                loading={state.loading}
                exporting={export.exporting}
                on_export={export.export.clone()}
            />
            <main class="main">
                <div class="container">
                    <KpiCards summary={summary} currency_prefix={prefix.clone()} />
                    <Controls
                        officers={view.officers.clone()}
                        selection={state.selection.clone()}
                        breakdown={view.breakdown.clone()}
                        on_officer_change={actions.select_officer.clone()}
                        on_date_change={actions.select_date.clone()}
                    />
                    {match &view.officer_details {
                        Some(details) => html! {
                            <OfficerDetailsPanel
                                officer={state.selection.officer.clone()}
                                details={details.clone()}
                                currency_prefix={prefix.clone()}
                            />
                        },
                        None => html! {},
                    }}
                    <ParChart
                        weekly={view.weekly.clone()}
                        breakdown={view.breakdown.clone()}
                        variant={state.selection.chart}
                        currency_prefix={prefix.clone()}
                        on_variant_change={actions.select_chart.clone()}
                    />
                    <WeeklyTable weekly={view.weekly.clone()} currency_prefix={prefix} />
                    <p class={classes!("data-source", (!view.source.is_live()).then_some("fallback"))}>{format!("Showing {}", view.source.label())}</p>
                </div>
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
