use yew::prelude::*;

use crate::hooks::fetch::dispatch_list_fetch;
use crate::hooks::use_session::UseSessionHandle;
use crate::models::{EmergencyAlert, ReportQuery};
use crate::services::{alert_service, ApiClient};
use crate::stores::ListStore;
use crate::utils::FetchSeq;

#[derive(Clone)]
pub struct UseAlertsHandle {
    pub state: UseStateHandle<ListStore<EmergencyAlert>>,
    pub fetch: Callback<ReportQuery>,
    pub resolve: Callback<String>,
}

#[hook]
pub fn use_alerts() -> UseAlertsHandle {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let state = use_state(ListStore::<EmergencyAlert>::default);
    let seq = use_mut_ref(FetchSeq::new);
    let last_query = use_mut_ref(ReportQuery::default);
    let token = session.state.token.clone();

    let fetch = {
        let state = state.clone();
        let seq = seq.clone();
        let last_query = last_query.clone();
        let token = token.clone();
        Callback::from(move |query: ReportQuery| {
            *last_query.borrow_mut() = query.clone();
            let client = ApiClient::new(token.clone());
            dispatch_list_fetch(state.clone(), seq.borrow().clone(), async move {
                alert_service::fetch_alerts(&client, &query)
                    .await
                    .map(|data| (data.alerts, data.total))
            });
        })
    };

    let resolve = {
        let fetch = fetch.clone();
        let last_query = last_query.clone();
        Callback::from(move |id: String| {
            let fetch = fetch.clone();
            let query = last_query.borrow().clone();
            let client = ApiClient::new(token.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if alert_service::resolve_alert(&client, &id).await.is_ok() {
                    fetch.emit(query);
                }
            });
        })
    };

    UseAlertsHandle { state, fetch, resolve }
}
