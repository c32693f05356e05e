use yew::prelude::*;

use super::app::Screen;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Screen,
    pub on_select: Callback<Screen>,
    pub on_logout: Callback<MouseEvent>,
}

const ITEMS: &[(Screen, &str)] = &[
    (Screen::Dashboard, "📊 Dashboard"),
    (Screen::Vehicles, "🚛 Vehículos"),
    (Screen::Drivers, "🧑 Conductores"),
    (Screen::Employees, "👥 Empleados"),
    (Screen::Geofences, "📍 Geocercas"),
    (Screen::Announcements, "📢 Anuncios"),
    (Screen::Alerts, "🚨 Alertas"),
    (Screen::Punches, "🕐 Fichajes"),
];

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class="sidebar">
            <div class="sidebar-brand">{"Fleet Console"}</div>
            <ul class="sidebar-items">
                { for ITEMS.iter().map(|(screen, label)| {
                    let on_select = props.on_select.clone();
                    let screen = *screen;
                    let class = if props.active == screen { "sidebar-item active" } else { "sidebar-item" };
                    html! {
                        <li {class} onclick={Callback::from(move |_| on_select.emit(screen))}>
                            {*label}
                        </li>
                    }
                })}
            </ul>
            <button class="btn-logout" onclick={props.on_logout.clone()}>
                {"⎋ Cerrar sesión"}
            </button>
        </nav>
    }
}
