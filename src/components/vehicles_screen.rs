use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_vehicles, UseSessionHandle};
use crate::models::{NewVehicle, ReportQuery};

use super::ReportTable;

const LIMIT: u32 = 10;

#[function_component(VehiclesScreen)]
pub fn vehicles_screen() -> Html {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let vehicles = use_vehicles();
    let page = use_state(|| 1u32);

    let registration_ref = use_node_ref();
    let model_ref = use_node_ref();

    {
        let fetch = vehicles.fetch.clone();
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
        let create = vehicles.create.clone();
        let registration_ref = registration_ref.clone();
        let model_ref = model_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(registration), Some(model)) = (
                registration_ref.cast::<HtmlInputElement>(),
                model_ref.cast::<HtmlInputElement>(),
            ) {
                let registration_no = registration.value();
                if registration_no.is_empty() {
                    return;
                }
                let model_value = model.value();
                create.emit(NewVehicle {
                    registration_no,
                    model: (!model_value.is_empty()).then_some(model_value),
                    vehicle_type: None,
                });
                registration.set_value("");
                model.set_value("");
            }
        })
    };

    let on_delete = {
        let state = vehicles.state.clone();
        let remove = vehicles.remove.clone();
        Callback::from(move |index: usize| {
            if let Some(vehicle) = state.rows.get(index) {
                remove.emit(vehicle.id.clone());
            }
        })
    };

    let rows: Vec<Vec<String>> = vehicles
        .state
        .rows
        .iter()
        .map(|vehicle| {
            vec![
                vehicle.registration_no.clone(),
                vehicle.model.clone().unwrap_or_default(),
                vehicle.vehicle_type.clone().unwrap_or_default(),
                vehicle.status.clone().unwrap_or_default(),
                vehicle.driver_name.clone().unwrap_or_default(),
            ]
        })
        .collect();

    html! {
        <div class="screen">
            <h2>{"Vehículos"}</h2>

            <form class="inline-form" onsubmit={on_create}>
                <input type="text" placeholder="Matrícula" ref={registration_ref} required=true />
                <input type="text" placeholder="Modelo" ref={model_ref} />
                <button type="submit">{"Añadir vehículo"}</button>
            </form>

            <ReportTable
                columns={vec!["Matrícula", "Modelo", "Tipo", "Estado", "Conductor"]}
                rows={rows}
                loading={vehicles.state.loading}
                error={vehicles.state.error.clone()}
                page={*page}
                limit={LIMIT}
                total={vehicles.state.total}
                on_page={on_page}
                action_label={Some("Eliminar")}
                on_action={Some(on_delete)}
            />
        </div>
    }
}
