use yew::prelude::*;

use crate::hooks::{SessionContextProvider, UseSessionHandle};

use super::{
    AlertsScreen, AnnouncementsScreen, DashboardScreen, DriversScreen, EmployeesScreen,
    GeofencesScreen, LoginScreen, PunchesScreen, Sidebar, VehiclesScreen,
};

/// Pantallas de la consola
#[derive(Clone, Copy, PartialEq)]
pub enum Screen {
    Dashboard,
    Vehicles,
    Drivers,
    Employees,
    Geofences,
    Announcements,
    Alerts,
    Punches,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <Shell />
        </SessionContextProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let screen = use_state(|| Screen::Dashboard);

    if !session.state.is_authenticated {
        return html! { <LoginScreen /> };
    }

    let on_select = {
        let screen = screen.clone();
        Callback::from(move |selected: Screen| screen.set(selected))
    };

    let on_logout = session.logout.reform(|_: MouseEvent| ());

    let content = match *screen {
        Screen::Dashboard => html! { <DashboardScreen /> },
        Screen::Vehicles => html! { <VehiclesScreen /> },
        Screen::Drivers => html! { <DriversScreen /> },
        Screen::Employees => html! { <EmployeesScreen /> },
        Screen::Geofences => html! { <GeofencesScreen /> },
        Screen::Announcements => html! { <AnnouncementsScreen /> },
        Screen::Alerts => html! { <AlertsScreen /> },
        Screen::Punches => html! { <PunchesScreen /> },
    };

    html! {
        <div class="console-layout">
            <Sidebar active={*screen} {on_select} {on_logout} />
            <main class="console-content">
                {content}
            </main>
        </div>
    }
}
