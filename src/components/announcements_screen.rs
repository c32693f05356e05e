use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_announcements, UseSessionHandle};
use crate::models::{NewAnnouncement, ReportQuery};

use super::ReportTable;

const LIMIT: u32 = 10;

#[function_component(AnnouncementsScreen)]
pub fn announcements_screen() -> Html {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let announcements = use_announcements();
    let page = use_state(|| 1u32);

    let title_ref = use_node_ref();
    let body_ref = use_node_ref();

    {
        let fetch = announcements.fetch.clone();
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
        let create = announcements.create.clone();
        let title_ref = title_ref.clone();
        let body_ref = body_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(title), Some(body)) = (
                title_ref.cast::<HtmlInputElement>(),
                body_ref.cast::<HtmlInputElement>(),
            ) {
                let title_value = title.value();
                let body_value = body.value();
                if title_value.is_empty() || body_value.is_empty() {
                    return;
                }
                create.emit(NewAnnouncement {
                    title: title_value,
                    body: body_value,
                });
                title.set_value("");
                body.set_value("");
            }
        })
    };

    let on_delete = {
        let state = announcements.state.clone();
        let remove = announcements.remove.clone();
        Callback::from(move |index: usize| {
            if let Some(announcement) = state.rows.get(index) {
                remove.emit(announcement.id.clone());
            }
        })
    };

    let rows: Vec<Vec<String>> = announcements
        .state
        .rows
        .iter()
        .map(|announcement| {
            vec![
                announcement.title.clone(),
                announcement.body.clone().unwrap_or_default(),
                announcement.created_at.clone().unwrap_or_default(),
            ]
        })
        .collect();

    html! {
        <div class="screen">
            <h2>{"Anuncios"}</h2>

            <form class="inline-form" onsubmit={on_create}>
                <input type="text" placeholder="Título" ref={title_ref} required=true />
                <input type="text" placeholder="Mensaje" ref={body_ref} required=true />
                <button type="submit">{"Publicar anuncio"}</button>
            </form>

            <ReportTable
                columns={vec!["Título", "Mensaje", "Fecha"]}
                rows={rows}
                loading={announcements.state.loading}
                error={announcements.state.error.clone()}
                page={*page}
                limit={LIMIT}
                total={announcements.state.total}
                on_page={on_page}
                action_label={Some("Eliminar")}
                on_action={Some(on_delete)}
            />
        </div>
    }
}
