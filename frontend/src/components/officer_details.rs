use shared::format::{currency_compact, percent};
use shared::OfficerDetails;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OfficerDetailsProps {
    pub officer: String,
    pub details: OfficerDetails,
    pub currency_prefix: String,
}

#[function_component(OfficerDetailsPanel)]
pub fn officer_details_panel(props: &OfficerDetailsProps) -> Html {
    let details = &props.details;
    html! {
        <section class="officer-details" aria-label={props.officer.clone()}>
            <div class="detail-card">
                <p class="detail-title">{"Avg Loan Size"}</p>
                <p class="detail-value">{currency_compact(&props.currency_prefix, details.avg_loan_size)}</p>
            </div>
            <div class="detail-card">
                <p class="detail-title">{"Collection Rate"}</p>
                <p class="detail-value">{percent(details.collection_rate)}</p>
            </div>
            <div class="detail-card">
                <p class="detail-title">{"Current PAR"}</p>
                <p class="detail-value">{details.current_par.to_string()}</p>
            </div>
        </section>
    }
}
