use yew::prelude::*;

use crate::hooks::fetch::dispatch_list_fetch;
use crate::hooks::use_session::UseSessionHandle;
use crate::models::{Geofence, NewGeofence, ReportQuery};
use crate::services::{geofence_service, ApiClient};
use crate::stores::ListStore;
use crate::utils::FetchSeq;

#[derive(Clone)]
pub struct UseGeofencesHandle {
    pub state: UseStateHandle<ListStore<Geofence>>,
    pub fetch: Callback<ReportQuery>,
    pub create: Callback<NewGeofence>,
    pub remove: Callback<String>,
}

#[hook]
pub fn use_geofences() -> UseGeofencesHandle {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let state = use_state(ListStore::<Geofence>::default);
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
                geofence_service::fetch_geofences(&client, &query)
                    .await
                    .map(|data| (data.geofences, data.total))
            });
        })
    };

    let create = {
        let fetch = fetch.clone();
        let last_query = last_query.clone();
        let token = token.clone();
        Callback::from(move |geofence: NewGeofence| {
            let fetch = fetch.clone();
            let query = last_query.borrow().clone();
            let client = ApiClient::new(token.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if geofence_service::create_geofence(&client, &geofence).await.is_ok() {
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
                if geofence_service::delete_geofence(&client, &id).await.is_ok() {
                    fetch.emit(query);
                }
            });
        })
    };

    UseGeofencesHandle { state, fetch, create, remove }
}
