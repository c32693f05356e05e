// ============================================================================
// USE SESSION HOOK - Ciclo de vida de la sesión (login OTP / logout / restore)
// ============================================================================
// Único punto que muta el AuthStore. El resto de la app lo recibe por
// contexto y solo lee.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::services::{auth_service, notify, ApiClient};
use crate::stores::{auth_store, AuthStore};
use crate::utils::constants::STORAGE_KEY_REMEMBERED_PHONE;
use crate::utils::storage;

#[derive(Clone)]
pub struct UseSessionHandle {
    pub state: UseStateHandle<AuthStore>,
    pub request_otp: Callback<String>,
    pub verify_otp: Callback<(String, String)>,
    pub logout: Callback<()>,
}

impl PartialEq for UseSessionHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.state == *other.state
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let state = use_state(AuthStore::default);
    // Timer de expiración pendiente; reemplazarlo o soltarlo lo cancela
    let expiry_timer = use_mut_ref(|| None::<Timeout>);

    // Restaurar sesión al montar
    {
        let state = state.clone();
        let expiry_timer = expiry_timer.clone();
        use_effect_with((), move |_| {
            if let Some(restored) = auth_store::restore() {
                arm_expiry_timer(&expiry_timer, &restored, state.clone());
                state.set(restored);
            }
            || ()
        });
    }

    // Solicitar OTP
    let request_otp = Callback::from(move |phone: String| {
        wasm_bindgen_futures::spawn_local(async move {
            let client = ApiClient::new(None);
            if let Err(e) = auth_service::request_otp(&client, &phone).await {
                log::error!("❌ Error solicitando OTP: {}", e);
            }
        });
    });

    // Verificar OTP y abrir sesión
    let verify_otp = {
        let state = state.clone();
        let expiry_timer = expiry_timer.clone();
        Callback::from(move |(phone, otp): (String, String)| {
            let state = state.clone();
            let expiry_timer = expiry_timer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new(None);
                match auth_service::verify_otp(&client, &phone, &otp).await {
                    Ok(tokens) => {
                        login(tokens.token, tokens.refresh_token, &phone, state, expiry_timer);
                    }
                    Err(e) => {
                        log::error!("❌ Error verificando OTP: {}", e);
                    }
                }
            });
        })
    };

    // Logout
    let logout = {
        let state = state.clone();
        let expiry_timer = expiry_timer.clone();
        Callback::from(move |_| {
            // Cancelar timer de expiración pendiente
            expiry_timer.borrow_mut().take();
            auth_store::clear_persisted();
            log::info!("👋 Logout");
            state.set(AuthStore::logged_out());
        })
    };

    UseSessionHandle {
        state,
        request_otp,
        verify_otp,
        logout,
    }
}

/// Un decode fallido aborta el login entero: sin identidad no hay sesión y
/// no se persiste nada.
fn login(
    token: String,
    refresh_token: Option<String>,
    phone: &str,
    state: UseStateHandle<AuthStore>,
    expiry_timer: Rc<RefCell<Option<Timeout>>>,
) {
    match AuthStore::from_tokens(token, refresh_token) {
        Ok(session) => {
            auth_store::persist(&session);
            let _ = storage::save_raw(STORAGE_KEY_REMEMBERED_PHONE, phone);
            log::info!("✅ Login exitoso: usuario {:?}", session.user_id);
            arm_expiry_timer(&expiry_timer, &session, state.clone());
            state.set(session);
        }
        Err(e) => {
            log::error!("❌ El token recibido no decodifica, login abortado: {}", e);
            notify::error("No se pudo iniciar sesión: el servidor devolvió un token inválido");
        }
    }
}

/// Programa el logout automático al llegar la expiración del token
fn arm_expiry_timer(
    expiry_timer: &Rc<RefCell<Option<Timeout>>>,
    session: &AuthStore,
    state: UseStateHandle<AuthStore>,
) {
    let Some(exp) = session.expiry() else { return };

    let now_ms = js_sys::Date::now();
    let remaining_ms = ((exp as f64) * 1000.0 - now_ms).clamp(0.0, u32::MAX as f64) as u32;

    let handle = Timeout::new(remaining_ms, move || {
        log::warn!("⚠️ Token expirado, cerrando sesión");
        notify::error("Tu sesión ha expirado. Inicia sesión de nuevo.");
        auth_store::clear_persisted();
        state.set(AuthStore::logged_out());
    });

    // Reemplazar el timer anterior lo cancela
    *expiry_timer.borrow_mut() = Some(handle);
}
