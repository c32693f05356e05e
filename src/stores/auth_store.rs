// ============================================================================
// AUTH STORE - Estado de sesión
// ============================================================================
// Único dueño del token: se muta solo via login/logout/restore en
// use_session. El resto de la app lo lee a través del contexto.
// ============================================================================

use crate::utils::constants::{
    STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_COMPANY_ID, STORAGE_KEY_REFRESH_TOKEN,
};
use crate::utils::jwt::{decode_claims, JwtError};
use crate::utils::storage;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthStore {
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
    pub user_id: Option<String>,
    pub company_id: Option<String>,
}

impl AuthStore {
    /// Sesión autenticada a partir de los tokens del backend. Si los claims
    /// no decodifican, el login se aborta entero: no hay sesión a medias ni
    /// token persistido sin identidad.
    pub fn from_tokens(token: String, refresh_token: Option<String>) -> Result<Self, JwtError> {
        let claims = decode_claims(&token)?;
        Ok(Self {
            token: Some(token),
            refresh_token,
            is_authenticated: true,
            user_id: Some(claims.user_id),
            company_id: claims.company_id,
        })
    }

    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Expiración (epoch segundos) de la sesión actual, si hay token válido
    pub fn expiry(&self) -> Option<i64> {
        let token = self.token.as_deref()?;
        decode_claims(token).ok().map(|claims| claims.exp)
    }
}

/// Persiste la sesión en localStorage (token y refresh tal cual, sin JSON)
pub fn persist(store: &AuthStore) {
    if let Some(token) = &store.token {
        let _ = storage::save_raw(STORAGE_KEY_AUTH_TOKEN, token);
    }
    if let Some(refresh) = &store.refresh_token {
        let _ = storage::save_raw(STORAGE_KEY_REFRESH_TOKEN, refresh);
    }
    if let Some(company_id) = &store.company_id {
        let _ = storage::save_raw(STORAGE_KEY_COMPANY_ID, company_id);
    }
}

/// Limpia las claves de sesión persistidas
pub fn clear_persisted() {
    storage::remove_keys(&[
        STORAGE_KEY_AUTH_TOKEN,
        STORAGE_KEY_REFRESH_TOKEN,
        STORAGE_KEY_COMPANY_ID,
    ]);
}

/// Restaura la sesión al arrancar. Un token que ya no decodifica se trata
/// como sesión corrupta: limpieza completa y vuelta al login.
pub fn restore() -> Option<AuthStore> {
    let token = storage::load_raw(STORAGE_KEY_AUTH_TOKEN)?;
    let refresh = storage::load_raw(STORAGE_KEY_REFRESH_TOKEN);

    match AuthStore::from_tokens(token, refresh) {
        Ok(store) => {
            log::info!("✅ Sesión restaurada (usuario {:?})", store.user_id);
            Some(store)
        }
        Err(e) => {
            log::error!("❌ Token persistido inválido, limpiando sesión: {}", e);
            clear_persisted();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn mint(user_id: &str, company_id: &str, exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(
            serde_json::json!({ "user_id": user_id, "company_id": company_id, "exp": exp })
                .to_string()
                .as_bytes(),
        );
        format!("{}.{}.firma", header, payload)
    }

    #[test]
    fn login_exitoso_deriva_la_identidad_de_los_claims() {
        let token = mint("u-42", "c-9", 2_000_000_000);
        let store = AuthStore::from_tokens(token.clone(), Some("r-1".to_string())).unwrap();

        assert!(store.is_authenticated);
        assert_eq!(store.token, Some(token));
        assert_eq!(store.refresh_token.as_deref(), Some("r-1"));
        assert_eq!(store.user_id.as_deref(), Some("u-42"));
        assert_eq!(store.company_id.as_deref(), Some("c-9"));
        assert_eq!(store.expiry(), Some(2_000_000_000));
    }

    #[test]
    fn token_que_no_decodifica_aborta_el_login() {
        let result = AuthStore::from_tokens("no-es-un-jwt".to_string(), None);
        assert_eq!(result, Err(JwtError::Format));
    }

    #[test]
    fn la_sesion_cerrada_no_esta_autenticada() {
        let store = AuthStore::logged_out();
        assert!(!store.is_authenticated);
        assert_eq!(store.token, None);
        assert_eq!(store.user_id, None);
        assert_eq!(store.expiry(), None);
    }
}
