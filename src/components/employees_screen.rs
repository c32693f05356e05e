use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_employees, UseSessionHandle};
use crate::models::{NewEmployee, ReportQuery};

use super::ReportTable;

const LIMIT: u32 = 10;

#[function_component(EmployeesScreen)]
pub fn employees_screen() -> Html {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let employees = use_employees();
    let page = use_state(|| 1u32);

    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let department_ref = use_node_ref();

    {
        let fetch = employees.fetch.clone();
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
        let create = employees.create.clone();
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let department_ref = department_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(name), Some(phone), Some(department)) = (
                name_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
                department_ref.cast::<HtmlInputElement>(),
            ) {
                let name_value = name.value();
                let phone_value = phone.value();
                if name_value.is_empty() || phone_value.is_empty() {
                    return;
                }
                let department_value = department.value();
                create.emit(NewEmployee {
                    name: name_value,
                    phone: phone_value,
                    department: (!department_value.is_empty()).then_some(department_value),
                    designation: None,
                });
                name.set_value("");
                phone.set_value("");
                department.set_value("");
            }
        })
    };

    let on_delete = {
        let state = employees.state.clone();
        let remove = employees.remove.clone();
        Callback::from(move |index: usize| {
            if let Some(employee) = state.rows.get(index) {
                remove.emit(employee.id.clone());
            }
        })
    };

    let rows: Vec<Vec<String>> = employees
        .state
        .rows
        .iter()
        .map(|employee| {
            vec![
                employee.name.clone(),
                employee.phone.clone().unwrap_or_default(),
                employee.department.clone().unwrap_or_default(),
                employee.designation.clone().unwrap_or_default(),
            ]
        })
        .collect();

    html! {
        <div class="screen">
            <h2>{"Empleados"}</h2>

            <form class="inline-form" onsubmit={on_create}>
                <input type="text" placeholder="Nombre" ref={name_ref} required=true />
                <input type="tel" placeholder="Teléfono" ref={phone_ref} required=true />
                <input type="text" placeholder="Departamento" ref={department_ref} />
                <button type="submit">{"Añadir empleado"}</button>
            </form>

            <ReportTable
                columns={vec!["Nombre", "Teléfono", "Departamento", "Puesto"]}
                rows={rows}
                loading={employees.state.loading}
                error={employees.state.error.clone()}
                page={*page}
                limit={LIMIT}
                total={employees.state.total}
                on_page={on_page}
                action_label={Some("Eliminar")}
                on_action={Some(on_delete)}
            />
        </div>
    }
}
