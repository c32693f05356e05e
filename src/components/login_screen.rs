use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::UseSessionHandle;
use crate::utils::constants::STORAGE_KEY_REMEMBERED_PHONE;
use crate::utils::storage;

/// Login en dos pasos: teléfono -> OTP
#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let session = use_context::<UseSessionHandle>().expect("falta SessionContextProvider");
    let otp_requested = use_state(|| false);
    let phone = use_state(|| storage::load_raw(STORAGE_KEY_REMEMBERED_PHONE).unwrap_or_default());
    let phone_ref = use_node_ref();
    let otp_ref = use_node_ref();

    let on_request_otp = {
        let session = session.clone();
        let otp_requested = otp_requested.clone();
        let phone = phone.clone();
        let phone_ref = phone_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(input) = phone_ref.cast::<HtmlInputElement>() {
                let value = input.value();
                if value.is_empty() {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("Por favor, introduce tu teléfono");
                    }
                    return;
                }
                phone.set(value.clone());
                session.request_otp.emit(value);
                otp_requested.set(true);
            }
        })
    };

    let on_verify_otp = {
        let session = session.clone();
        let phone = phone.clone();
        let otp_ref = otp_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(input) = otp_ref.cast::<HtmlInputElement>() {
                let otp = input.value();
                if otp.is_empty() {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("Por favor, introduce el código OTP");
                    }
                    return;
                }
                session.verify_otp.emit(((*phone).clone(), otp));
            }
        })
    };

    let on_back = {
        let otp_requested = otp_requested.clone();
        Callback::from(move |_| otp_requested.set(false))
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🚚"}</div>
                    </div>
                    <h1>{"Fleet Console"}</h1>
                    <p>{"Gestión de flota"}</p>
                </div>

                if !*otp_requested {
                    <form class="login-form" onsubmit={on_request_otp}>
                        <div class="form-group">
                            <label for="phone">{"Teléfono"}</label>
                            <input
                                type="tel"
                                id="phone"
                                name="phone"
                                placeholder="Introduce tu teléfono"
                                value={(*phone).clone()}
                                ref={phone_ref}
                                required=true
                            />
                        </div>

                        <button type="submit" class="btn-login">
                            <span class="btn-text">{"Enviar código"}</span>
                        </button>
                    </form>
                } else {
                    <form class="login-form" onsubmit={on_verify_otp}>
                        <div class="form-group">
                            <label for="otp">{"Código OTP"}</label>
                            <input
                                type="text"
                                id="otp"
                                name="otp"
                                placeholder="Código recibido por SMS"
                                ref={otp_ref}
                                required=true
                            />
                        </div>

                        <button type="submit" class="btn-login">
                            <span class="btn-text">{"Entrar"}</span>
                        </button>

                        <button type="button" class="btn-back" onclick={on_back}>
                            {"Cambiar teléfono"}
                        </button>
                    </form>
                }
            </div>
        </div>
    }
}
