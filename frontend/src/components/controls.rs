use chrono::NaiveDate;
use shared::format::week_label;
use shared::{CategoryShare, Selection};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::date_utils::{input_value, parse_input_date};

#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub officers: Vec<String>,
    pub selection: Selection,
    pub breakdown: Vec<CategoryShare>,
    pub on_officer_change: Callback<String>,
    pub on_date_change: Callback<NaiveDate>,
}

#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    let show_performance = use_state(|| false);

    let on_officer_change = {
        let on_officer_change = props.on_officer_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_officer_change.emit(select.value());
        })
    };

    let on_date_change = {
        let on_date_change = props.on_date_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // Cleared or half-typed input keeps the current date
            if let Some(date) = parse_input_date(&input.value()) {
                on_date_change.emit(date);
            }
        })
    };

    let toggle_performance = {
        let show_performance = show_performance.clone();
        Callback::from(move |_: MouseEvent| show_performance.set(!*show_performance))
    };

    html! {
        <section class="controls">
            <div class="control officer-control">
                <label for="officer-select">{"Collection Officer:"}</label>
                <select id="officer-select" onchange={on_officer_change}>
                    {for props.officers.iter().map(|name| html! {
                        <option value={name.clone()} selected={*name == props.selection.officer}>
                            {name}
                        </option>
                    })}
                </select>
            </div>

            <div class="control performance-control">
                <label>{"Portfolio Performance:"}</label>
                <button class="performance-toggle" onclick={toggle_performance}>
                    {"View Categories"}
                </button>
                {if *show_performance {
                    html! {
                        <div class="performance-popover">
                            <h4>{"Portfolio Performance Categories"}</h4>
                            {for props.breakdown.iter().map(|share| html! {
                                <div class="performance-row">
                                    <span class="swatch" style={format!("background-color: {}", share.category.color_hex())}></span>
                                    <div class="category">
                                        <p class="category-name">{share.category.name()}</p>
                                        <p class="category-description">{share.category.description()}</p>
                                    </div>
                                    <p class="category-value">{format!("{}%", share.percent)}</p>
                                </div>
                            })}
                        </div>
                    }
                } else { html! {} }}
            </div>

            <div class="control date-control">
                <label for="week-input">{format!("Week: {}", week_label(props.selection.date))}</label>
                <input
                    id="week-input"
                    type="date"
                    value={input_value(props.selection.date)}
                    onchange={on_date_change}
                />
            </div>
        </section>
    }
}
