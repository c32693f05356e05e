use yew::prelude::*;

use crate::hooks::{use_alerts, UseSessionHandle};
use crate::models::ReportQuery;

use super::ReportTable;

const LIMIT: u32 = 10;

/// Alertas de emergencia: listado + resolución
#[function_component(AlertsScreen)]
pub fn alerts_screen() -> Html {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let alerts = use_alerts();
    let page = use_state(|| 1u32);

    {
        let fetch = alerts.fetch.clone();
        let company_id = session.state.company_id.clone();
        use_effect_with(*page, move |page| {
            fetch.emit(ReportQuery::with_company(company_id).page(*page));
            || ()
        });
    }

    let on_page = {
        let page = page.clone();
        Callback::from(move |selected: u32| page.set(selected))
    };

    let on_resolve = {
        let state = alerts.state.clone();
        let resolve = alerts.resolve.clone();
        Callback::from(move |index: usize| {
            if let Some(alert) = state.rows.get(index) {
                if alert.resolved {
                    return;
                }
                resolve.emit(alert.id.clone());
            }
        })
    };

    let rows: Vec<Vec<String>> = alerts
        .state
        .rows
        .iter()
        .map(|alert| {
            vec![
                alert.alert_type.clone().unwrap_or_else(|| "SOS".to_string()),
                alert.driver_name.clone().unwrap_or_default(),
                alert.vehicle_registration.clone().unwrap_or_default(),
                alert.created_at.clone().unwrap_or_default(),
                if alert.resolved { "Resuelta".to_string() } else { "Activa".to_string() },
            ]
        })
        .collect();

    html! {
        <div class="screen">
            <h2>{"Alertas de emergencia"}</h2>

            <ReportTable
                columns={vec!["Tipo", "Conductor", "Vehículo", "Fecha", "Estado"]}
                rows={rows}
                loading={alerts.state.loading}
                error={alerts.state.error.clone()}
                page={*page}
                limit={LIMIT}
                total={alerts.state.total}
                on_page={on_page}
                action_label={Some("Resolver")}
                on_action={Some(on_resolve)}
            />
        </div>
    }
}
