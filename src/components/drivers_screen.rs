use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_drivers, UseSessionHandle};
use crate::models::{NewDriver, ReportQuery};

use super::ReportTable;

const LIMIT: u32 = 10;

#[function_component(DriversScreen)]
pub fn drivers_screen() -> Html {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let drivers = use_drivers();
    let page = use_state(|| 1u32);

    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let license_ref = use_node_ref();

    {
        let fetch = drivers.fetch.clone();
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
        let create = drivers.create.clone();
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let license_ref = license_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(name), Some(phone), Some(license)) = (
                name_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
                license_ref.cast::<HtmlInputElement>(),
            ) {
                let name_value = name.value();
                let phone_value = phone.value();
                if name_value.is_empty() || phone_value.is_empty() {
                    return;
                }
                let license_value = license.value();
                create.emit(NewDriver {
                    name: name_value,
                    phone: phone_value,
                    license_no: (!license_value.is_empty()).then_some(license_value),
                });
                name.set_value("");
                phone.set_value("");
                license.set_value("");
            }
        })
    };

    let on_delete = {
        let state = drivers.state.clone();
        let remove = drivers.remove.clone();
        Callback::from(move |index: usize| {
            if let Some(driver) = state.rows.get(index) {
                remove.emit(driver.id.clone());
            }
        })
    };

    let rows: Vec<Vec<String>> = drivers
        .state
        .rows
        .iter()
        .map(|driver| {
            vec![
                driver.name.clone(),
                driver.phone.clone().unwrap_or_default(),
                driver.license_no.clone().unwrap_or_default(),
                driver.status.clone().unwrap_or_default(),
                driver.vehicle_registration.clone().unwrap_or_default(),
            ]
        })
        .collect();

    html! {
        <div class="screen">
            <h2>{"Conductores"}</h2>

            <form class="inline-form" onsubmit={on_create}>
                <input type="text" placeholder="Nombre" ref={name_ref} required=true />
                <input type="tel" placeholder="Teléfono" ref={phone_ref} required=true />
                <input type="text" placeholder="Nº de licencia" ref={license_ref} />
                <button type="submit">{"Añadir conductor"}</button>
            </form>

            <ReportTable
                columns={vec!["Nombre", "Teléfono", "Licencia", "Estado", "Vehículo"]}
                rows={rows}
                loading={drivers.state.loading}
                error={drivers.state.error.clone()}
                page={*page}
                limit={LIMIT}
                total={drivers.state.total}
                on_page={on_page}
                action_label={Some("Eliminar")}
                on_action={Some(on_delete)}
            />
        </div>
    }
}
