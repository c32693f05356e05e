use yew::prelude::*;

use crate::hooks::fetch::dispatch_list_fetch;
use crate::hooks::use_session::UseSessionHandle;
use crate::models::{Driver, NewDriver, ReportQuery};
use crate::services::{driver_service, ApiClient};
use crate::stores::ListStore;
use crate::utils::FetchSeq;

#[derive(Clone)]
pub struct UseDriversHandle {
    pub state: UseStateHandle<ListStore<Driver>>,
    pub fetch: Callback<ReportQuery>,
    pub create: Callback<NewDriver>,
    pub remove: Callback<String>,
}

#[hook]
pub fn use_drivers() -> UseDriversHandle {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let state = use_state(ListStore::<Driver>::default);
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
                driver_service::fetch_drivers(&client, &query)
                    .await
                    .map(|data| (data.drivers, data.total))
            });
        })
    };

    let create = {
        let fetch = fetch.clone();
        let last_query = last_query.clone();
        let token = token.clone();
        Callback::from(move |driver: NewDriver| {
            let fetch = fetch.clone();
            let query = last_query.borrow().clone();
            let client = ApiClient::new(token.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if driver_service::create_driver(&client, &driver).await.is_ok() {
                    fetch.emit(query);
                }
            });
        })
    };

    let remove = {
        let fetch = fetch.clone();
        let last_query = last_query.clone();
        Callback::from(move |id: String| {
            let fetch = fetch.clone();
            let query = last_query.borrow().clone();
            let client = ApiClient::new(token.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if driver_service::delete_driver(&client, &id).await.is_ok() {
                    fetch.emit(query);
                }
            });
        })
    };

    UseDriversHandle { state, fetch, create, remove }
}
