use yew::prelude::*;

use crate::hooks::fetch::dispatch_list_fetch;
use crate::hooks::use_session::UseSessionHandle;
use crate::models::{NewVehicle, ReportQuery, Vehicle};
use crate::services::{vehicle_service, ApiClient};
use crate::stores::ListStore;
use crate::utils::FetchSeq;

#[derive(Clone)]
pub struct UseVehiclesHandle {
    pub state: UseStateHandle<ListStore<Vehicle>>,
    pub fetch: Callback<ReportQuery>,
    pub create: Callback<NewVehicle>,
    pub remove: Callback<String>,
}

#[hook]
pub fn use_vehicles() -> UseVehiclesHandle {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let state = use_state(ListStore::<Vehicle>::default);
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
                vehicle_service::fetch_vehicles(&client, &query)
                    .await
                    .map(|data| (data.vehicles, data.total))
            });
        })
    };

    // Tras un alta exitosa se recarga la lista con la última query
    let create = {
        let fetch = fetch.clone();
        let last_query = last_query.clone();
        let token = token.clone();
        Callback::from(move |vehicle: NewVehicle| {
            let fetch = fetch.clone();
            let query = last_query.borrow().clone();
            let client = ApiClient::new(token.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if vehicle_service::create_vehicle(&client, &vehicle).await.is_ok() {
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
                if vehicle_service::delete_vehicle(&client, &id).await.is_ok() {
                    fetch.emit(query);
                }
            });
        })
    };

    UseVehiclesHandle { state, fetch, create, remove }
}
