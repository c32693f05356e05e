// ============================================================================
// SESSION GUARD - Expiración de sesión (HTTP 401)
// ============================================================================

use crate::services::notify;
use crate::stores::auth_store;
use crate::utils::constants::LOGIN_PATH;

/// Si la respuesta viene con 401: aviso al usuario, limpieza del token
/// persistido y navegación completa al login. Devuelve true ("handled") para
/// que el caller corte el procesamiento de esa respuesta.
pub fn intercept_unauthorized(status: u16) -> bool {
    if status != 401 {
        return false;
    }

    log::warn!("⚠️ Sesión expirada (HTTP 401), forzando logout");
    notify::error("Tu sesión ha expirado. Inicia sesión de nuevo.");
    auth_store::clear_persisted();
    redirect_to_login();
    true
}

fn redirect_to_login() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(LOGIN_PATH);
    }
}

#[cfg(test)]
mod tests {
    // El comportamiento completo del guard (limpieza de storage + handled)
    // se cubre en tests/web.rs, que corre contra localStorage real.
}
