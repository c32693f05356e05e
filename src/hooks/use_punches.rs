use yew::prelude::*;

use crate::hooks::fetch::dispatch_list_fetch;
use crate::hooks::use_session::UseSessionHandle;
use crate::models::{PunchLog, ReportQuery};
use crate::services::{punch_service, ApiClient};
use crate::stores::ListStore;
use crate::utils::FetchSeq;

#[derive(Clone)]
pub struct UsePunchesHandle {
    pub state: UseStateHandle<ListStore<PunchLog>>,
    pub fetch: Callback<ReportQuery>,
}

/// Reporte de fichajes: solo lectura
#[hook]
pub fn use_punches() -> UsePunchesHandle {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let state = use_state(ListStore::<PunchLog>::default);
    let seq = use_mut_ref(FetchSeq::new);
    let token = session.state.token.clone();

    let fetch = {
        let state = state.clone();
        let seq = seq.clone();
        Callback::from(move |query: ReportQuery| {
            let client = ApiClient::new(token.clone());
            dispatch_list_fetch(state.clone(), seq.borrow().clone(), async move {
                punch_service::fetch_punch_logs(&client, &query)
                    .await
                    .map(|data| (data.punches, data.total))
            });
        })
    };

    UsePunchesHandle { state, fetch }
}
