use chrono::{Duration, Utc};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_punches, UseSessionHandle};
use crate::models::ReportQuery;

use super::ReportTable;

const LIMIT: u32 = 10;

/// Reporte de fichajes con rango de fechas (por defecto, la última semana)
#[function_component(PunchesScreen)]
pub fn punches_screen() -> Html {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let punches = use_punches();
    let page = use_state(|| 1u32);

    let today = Utc::now().date_naive();
    let week_ago = today - Duration::days(7);
    let range = use_state(|| (week_ago.to_string(), today.to_string()));

    let from_ref = use_node_ref();
    let to_ref = use_node_ref();

    {
        let fetch = punches.fetch.clone();
        let company_id = session.state.company_id.clone();
        let deps = (*page, (*range).clone());
        use_effect_with(deps, move |(page, (from, to))| {
            fetch.emit(
                ReportQuery::with_company(company_id)
                    .page(*page)
                    .range(Some(from.clone()), Some(to.clone())),
            );
            || ()
        });
    }

    let on_page = {
        let page = page.clone();
        Callback::from(move |selected: u32| page.set(selected))
    };

    let on_filter = {
        let range = range.clone();
        let page = page.clone();
        let from_ref = from_ref.clone();
        let to_ref = to_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(from), Some(to)) = (
                from_ref.cast::<HtmlInputElement>(),
                to_ref.cast::<HtmlInputElement>(),
            ) {
                let from_value = from.value();
                let to_value = to.value();
                if from_value.is_empty() || to_value.is_empty() {
                    return;
                }
                page.set(1);
                range.set((from_value, to_value));
            }
        })
    };

    let rows: Vec<Vec<String>> = punches
        .state
        .rows
        .iter()
        .map(|punch| {
            vec![
                punch.employee_name.clone(),
                punch.date.clone(),
                punch.punch_in.clone().unwrap_or_default(),
                punch.punch_out.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    html! {
        <div class="screen">
            <h2>{"Fichajes"}</h2>

            <form class="inline-form" onsubmit={on_filter}>
                <input type="date" value={(*range).0.clone()} ref={from_ref} />
                <input type="date" value={(*range).1.clone()} ref={to_ref} />
                <button type="submit">{"Filtrar"}</button>
            </form>

            <ReportTable
                columns={vec!["Empleado", "Fecha", "Entrada", "Salida"]}
                rows={rows}
                loading={punches.state.loading}
                error={punches.state.error.clone()}
                page={*page}
                limit={LIMIT}
                total={punches.state.total}
                on_page={on_page}
            />
        </div>
    }
}
