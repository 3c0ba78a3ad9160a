use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use shared::{ChartVariant, Dashboard, FetchKind, FetchTicket, ResolvedView, Selection};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct ParDataState {
    pub selection: Selection,
    pub view: Rc<ResolvedView>,
    pub loading: bool,
    pub backend_unavailable: bool,
}

pub struct UseParDataResult {
    pub state: ParDataState,
    pub actions: UseParDataActions,
}

#[derive(Clone, PartialEq)]
pub struct UseParDataActions {
    pub select_officer: Callback<String>,
    pub select_date: Callback<NaiveDate>,
    pub select_chart: Callback<ChartVariant>,
}

/// Drives a [`Dashboard`] session: issues the fetches it asks for and feeds
/// the responses back, re-rendering whenever one is applied.
#[hook]
pub fn use_par_data(api_client: &ApiClient) -> UseParDataResult {
    let dashboard = use_mut_ref(|| Dashboard::new(date_utils::today()));
    let rerender = use_force_update();

    // Initial load
    use_effect_with((), {
        let api_client = api_client.clone();
        let dashboard = dashboard.clone();
        let rerender = rerender.clone();
        move |_| {
            let tickets = dashboard.borrow_mut().start();
            for ticket in tickets {
                spawn_fetch(api_client.clone(), dashboard.clone(), ticket, rerender.clone());
            }
            || ()
        }
    });

    let select_officer = {
        let api_client = api_client.clone();
        let dashboard = dashboard.clone();
        let rerender = rerender.clone();
        use_callback((), move |officer: String, _| {
            let ticket = dashboard.borrow_mut().select_officer(&officer);
            rerender.force_update();
            if let Some(ticket) = ticket {
                spawn_fetch(api_client.clone(), dashboard.clone(), ticket, rerender.clone());
            }
        })
    };

    let select_date = {
        let api_client = api_client.clone();
        let dashboard = dashboard.clone();
        let rerender = rerender.clone();
        use_callback((), move |date: NaiveDate, _| {
            let tickets = dashboard.borrow_mut().select_date(date);
            rerender.force_update();
            for ticket in tickets {
                spawn_fetch(api_client.clone(), dashboard.clone(), ticket, rerender.clone());
            }
        })
    };

    let select_chart = {
        let dashboard = dashboard.clone();
        let rerender = rerender.clone();
        use_callback((), move |chart: ChartVariant, _| {
            dashboard.borrow_mut().select_chart(chart);
            rerender.force_update();
        })
    };

    let state = {
        let dashboard = dashboard.borrow();
        ParDataState {
            selection: dashboard.selection().clone(),
            view: Rc::new(dashboard.view()),
            loading: dashboard.is_loading(),
            backend_unavailable: dashboard.is_backend_unavailable(),
        }
    };

    let actions = UseParDataActions {
        select_officer,
        select_date,
        select_chart,
    };

    UseParDataResult { state, actions }
}

fn spawn_fetch(
    api_client: ApiClient,
    dashboard: Rc<RefCell<Dashboard>>,
    ticket: FetchTicket,
    rerender: UseForceUpdateHandle,
) {
    spawn_local(async move {
        let applied = match ticket.kind {
            FetchKind::Aggregate => {
                let result = api_client.get_overall(ticket.date).await;
                if let Err(e) = &result {
                    Logger::warn_with_component(
                        "par-data",
                        &format!("Failed to fetch overall data for {}: {}", ticket.date_param(), e),
                    );
                }
                dashboard.borrow_mut().complete_aggregate(&ticket, result)
            }
            FetchKind::Officer => {
                let result = api_client.get_officer(&ticket.officer, ticket.date).await;
                if let Err(e) = &result {
                    Logger::warn_with_component(
                        "par-data",
                        &format!("Failed to fetch data for {}: {}", ticket.officer, e),
                    );
                }
                dashboard.borrow_mut().complete_officer(&ticket, result)
            }
        };

        if applied {
            rerender.force_update();
        } else {
            Logger::debug_with_component(
                "par-data",
                &format!("Dropped stale response for {} on {}", ticket.officer, ticket.date_param()),
            );
        }
    });
}
