use shared::format::currency_compact;
use shared::{weekly_rows, WeeklyPoint};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WeeklyTableProps {
    pub weekly: Vec<WeeklyPoint>,
    pub currency_prefix: String,
}

#[function_component(WeeklyTable)]
pub fn weekly_table(props: &WeeklyTableProps) -> Html {
    let prefix = props.currency_prefix.as_str();
    html! {
        <section class="weekly-section">
            <h2>{"Weekly Breakdown"}</h2>
            <div class="table-container">
                <table class="weekly-table">
                    <thead>
                        <tr>
                            <th>{"Week"}</th>
                            <th>{"Outstanding"}</th>
                            <th>{"Provision"}</th>
                            <th>{"PAR"}</th>
                            <th>{"Risk"}</th>
                            <th>{"Trend"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for weekly_rows(&props.weekly).into_iter().map(|row| {
                            html! {
                                <tr>
                                    <td class="week">{&row.week}</td>
                                    <td class="money">{currency_compact(prefix, row.outstanding)}</td>
                                    <td class="money">{currency_compact(prefix, row.provision)}</td>
                                    <td class="par">{row.par.to_string()}</td>
                                    <td><span class={row.tier.css_class()}>{row.tier.label()}</span></td>
                                    {match row.trend {
                                        Some(trend) => html! {
                                            <td class={trend.direction.css_class()}>
                                                {format!("{} {}%", trend.direction.arrow(), trend.magnitude_label())}
                                            </td>
                                        },
                                        None => html! { <td class="trend neutral">{"-"}</td> },
                                    }}
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_rows_show_normalized_par_and_tier() {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();

        let props = WeeklyTableProps {
            weekly: vec![
                WeeklyPoint::new("12 Sep", 2_750_000_000.0, 134_750_000.0, 0.049),
                WeeklyPoint::new("20 Sep", 2_800_000_000.0, 128_800_000.0, 4.6),
            ],
            currency_prefix: "KES".to_string(),
        };
        yew::Renderer::<WeeklyTable>::with_root_and_props(root.clone(), props).render();
        gloo::timers::future::TimeoutFuture::new(10).await;

        let html = root.inner_html();
        assert!(html.contains("4.90%"));
        assert!(html.contains("4.60%"));
        assert_eq!(root.query_selector_all(".risk-badge.high").unwrap().length(), 2);
        assert!(root.query_selector(".trend.improving").unwrap().is_some());
    }
}
