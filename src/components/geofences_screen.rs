use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_geofences, UseSessionHandle};
use crate::models::{NewGeofence, ReportQuery};

use super::ReportTable;

const LIMIT: u32 = 10;

#[function_component(GeofencesScreen)]
pub fn geofences_screen() -> Html {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let geofences = use_geofences();
    let page = use_state(|| 1u32);

    let name_ref = use_node_ref();
    let lat_ref = use_node_ref();
    let lng_ref = use_node_ref();
    let radius_ref = use_node_ref();

    {
        let fetch = geofences.fetch.clone();
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

    let on_create = {
        let create = geofences.create.clone();
        let name_ref = name_ref.clone();
        let lat_ref = lat_ref.clone();
        let lng_ref = lng_ref.clone();
        let radius_ref = radius_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let inputs = (
                name_ref.cast::<HtmlInputElement>(),
                lat_ref.cast::<HtmlInputElement>(),
                lng_ref.cast::<HtmlInputElement>(),
                radius_ref.cast::<HtmlInputElement>(),
            );
            if let (Some(name), Some(lat), Some(lng), Some(radius)) = inputs {
                let name_value = name.value();
                // Coordenadas y radio deben ser numéricos
                let parsed = (
                    lat.value().parse::<f64>(),
                    lng.value().parse::<f64>(),
                    radius.value().parse::<f64>(),
                );
                if name_value.is_empty() {
                    return;
                }
                if let (Ok(center_lat), Ok(center_lng), Ok(radius_m)) = parsed {
                    create.emit(NewGeofence {
                        name: name_value,
                        center_lat,
                        center_lng,
                        radius_m,
                    });
                    name.set_value("");
                    lat.set_value("");
                    lng.set_value("");
                    radius.set_value("");
                } else if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message("Coordenadas o radio inválidos");
                }
            }
        })
    };

    let on_delete = {
        let state = geofences.state.clone();
        let remove = geofences.remove.clone();
        Callback::from(move |index: usize| {
            if let Some(geofence) = state.rows.get(index) {
                remove.emit(geofence.id.clone());
            }
        })
    };

    let rows: Vec<Vec<String>> = geofences
        .state
        .rows
        .iter()
        .map(|geofence| {
            vec![
                geofence.name.clone(),
                format!("{:.5}, {:.5}", geofence.center_lat, geofence.center_lng),
                format!("{} m", geofence.radius_m),
                if geofence.active { "Activa".to_string() } else { "Inactiva".to_string() },
            ]
        })
        .collect();

    html! {
        <div class="screen">
            <h2>{"Geocercas"}</h2>

            <form class="inline-form" onsubmit={on_create}>
                <input type="text" placeholder="Nombre" ref={name_ref} required=true />
                <input type="text" placeholder="Latitud" ref={lat_ref} required=true />
                <input type="text" placeholder="Longitud" ref={lng_ref} required=true />
                <input type="text" placeholder="Radio (m)" ref={radius_ref} required=true />
                <button type="submit">{"Añadir geocerca"}</button>
            </form>

            <ReportTable
                columns={vec!["Nombre", "Centro", "Radio", "Estado"]}
                rows={rows}
                loading={geofences.state.loading}
                error={geofences.state.error.clone()}
                page={*page}
                limit={LIMIT}
                total={geofences.state.total}
                on_page={on_page}
                action_label={Some("Eliminar")}
                on_action={Some(on_delete)}
            />
        </div>
    }
}
