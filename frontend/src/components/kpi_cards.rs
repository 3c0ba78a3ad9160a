use shared::format::{currency_full, percent, signed_percent};
use shared::KpiSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KpiCardsProps {
    pub summary: KpiSummary,
    pub currency_prefix: String,
}

#[function_component(KpiCards)]
pub fn kpi_cards(props: &KpiCardsProps) -> Html {
    let summary = &props.summary;
    let prefix = props.currency_prefix.as_str();
    let par = summary.snapshot.overall_par;
    let trend = summary.par_trend;

    let growth = match summary.outstanding_growth {
        Some(change) => format!("{} vs previous week", signed_percent(change)),
        None => "No previous week".to_string(),
    };

    html! {
        <section class="kpi-cards">
            <div class="kpi-card outstanding">
                <p class="kpi-title">{"Total Outstanding"}</p>
                <p class="kpi-value">{currency_full(prefix, summary.snapshot.total_outstanding)}</p>
                <p class="kpi-note">{growth}</p>
            </div>
            <div class="kpi-card provision">
                <p class="kpi-title">{"Total Gross Provision"}</p>
                <p class="kpi-value">{currency_full(prefix, summary.snapshot.total_gross_provision)}</p>
                <p class="kpi-note">{format!("{} coverage", percent(summary.provision_coverage))}</p>
            </div>
            <div class="kpi-card par">
                <p class="kpi-title">{"Overall PAR"}</p>
                <p class="kpi-value">
                    {par.to_string()}
                    <span class={par.risk_tier().css_class()}>{par.risk_tier().label()}</span>
                </p>
                {match trend {
                    Some(trend) => html! {
                        <p class={classes!("kpi-note", trend.direction.css_class())}>
                            {format!("{} {}% week over week", trend.direction.arrow(), trend.magnitude_label())}
                        </p>
                    },
                    None => html! { <p class="kpi-note">{"No previous week"}</p> },
                }}
            </div>
        </section>
    }
}
