use std::future::Future;

use yew::UseStateHandle;

use crate::services::ApiError;
use crate::stores::ListStore;
use crate::utils::FetchSeq;

/// Dispatch estándar de un fetch de lista: re-entra loading, lanza el future
/// y solo deja escribir a la respuesta del ticket vigente. Una respuesta
/// tardía de un dispatch anterior no puede pisar estado más fresco.
pub fn dispatch_list_fetch<T, F>(state: UseStateHandle<ListStore<T>>, seq: FetchSeq, fut: F)
where
    T: Clone + PartialEq + 'static,
    F: Future<Output = Result<(Vec<T>, u64), ApiError>> + 'static,
{
    let ticket = seq.begin();
    state.set(state.begin_fetch());

    wasm_bindgen_futures::spawn_local(async move {
        let result = fut.await;

        if !seq.is_current(ticket) {
            log::debug!("🕐 Respuesta tardía descartada (ticket {})", ticket);
            return;
        }

        match result {
            Ok((rows, total)) => state.set(state.commit(rows, total)),
            Err(e) => state.set(state.fail(e.to_string())),
        }
    });
}
