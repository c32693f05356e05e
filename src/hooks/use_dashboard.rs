use yew::prelude::*;

use crate::hooks::use_session::UseSessionHandle;
use crate::models::ReportQuery;
use crate::services::{dashboard_service, ApiClient};
use crate::stores::DashboardStore;
use crate::utils::FetchSeq;

#[derive(Clone)]
pub struct UseDashboardHandle {
    pub state: UseStateHandle<DashboardStore>,
    pub fetch: Callback<ReportQuery>,
}

#[hook]
pub fn use_dashboard() -> UseDashboardHandle {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let state = use_state(DashboardStore::default);
    let seq = use_mut_ref(FetchSeq::new);
    let token = session.state.token.clone();

    let fetch = {
        let state = state.clone();
        let seq = seq.clone();
        Callback::from(move |query: ReportQuery| {
            let state = state.clone();
            let seq = seq.borrow().clone();
            let ticket = seq.begin();
            let client = ApiClient::new(token.clone());

            state.set(state.begin_fetch());
            wasm_bindgen_futures::spawn_local(async move {
                let counters = dashboard_service::fetch_counters(&client, &query).await;
                let chart = dashboard_service::fetch_week_chart(&client, &query).await;

                if !seq.is_current(ticket) {
                    log::debug!("🕐 Respuesta tardía del dashboard descartada (ticket {})", ticket);
                    return;
                }

                match counters.and_then(|counters| chart.map(|chart| (counters, chart))) {
                    Ok((counters, chart)) => state.set(state.commit(counters, chart)),
                    Err(e) => state.set(state.fail(e.to_string())),
                }
            });
        })
    };

    UseDashboardHandle { state, fetch }
}
