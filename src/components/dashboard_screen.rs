use yew::prelude::*;

use crate::hooks::{use_dashboard, UseSessionHandle};
use crate::models::ReportQuery;

/// Dashboard: contadores agregados + gráfico semanal de fichajes
#[function_component(DashboardScreen)]
pub fn dashboard_screen() -> Html {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let dashboard = use_dashboard();

    {
        let fetch = dashboard.fetch.clone();
        let company_id = session.state.company_id.clone();
        use_effect_with((), move |_| {
            fetch.emit(ReportQuery::with_company(company_id));
            || ()
        });
    }

    let state = &dashboard.state;

    let counters = state.counters.clone().unwrap_or_default();
    let tiles = [
        ("🚛", "Vehículos", counters.vehicles),
        ("🧑", "Conductores", counters.drivers),
        ("👥", "Empleados", counters.employees),
        ("📍", "Geocercas", counters.geofences),
        ("🚨", "Alertas activas", counters.active_alerts),
    ];

    // Escala del gráfico: el día con más fichajes marca el 100%
    let max_value = state
        .previous_data
        .iter()
        .chain(state.current_data.iter())
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    html! {
        <div class="screen dashboard">
            <h2>{"Dashboard"}</h2>

            if let Some(error) = &state.error {
                <div class="report-error">{format!("⚠ {}", error)}</div>
            }
            if state.loading {
                <div class="report-loading">{"Cargando..."}</div>
            }

            <div class="counter-tiles">
                { for tiles.iter().map(|(icon, label, value)| html! {
                    <div class="counter-tile">
                        <span class="tile-icon">{*icon}</span>
                        <span class="tile-value">{*value}</span>
                        <span class="tile-label">{*label}</span>
                    </div>
                })}
            </div>

            <div class="week-chart">
                <h3>{"Fichajes por día (semana anterior vs actual)"}</h3>
                <div class="chart-bars">
                    { for state.days.iter().enumerate().map(|(index, day)| {
                        let previous = state.previous_data.get(index).copied().unwrap_or(0);
                        let current = state.current_data.get(index).copied().unwrap_or(0);
                        html! {
                            <div class="chart-day">
                                <div class="bars">
                                    <div
                                        class="bar bar-previous"
                                        style={format!("height: {}%", previous * 100 / max_value)}
                                        title={format!("Semana anterior: {}", previous)}
                                    ></div>
                                    <div
                                        class="bar bar-current"
                                        style={format!("height: {}%", current * 100 / max_value)}
                                        title={format!("Semana actual: {}", current)}
                                    ></div>
                                </div>
                                <span class="chart-day-label">{day.clone()}</span>
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
