// Tests que tocan localStorage: corren solo en wasm (wasm-pack test --headless)

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use fleet_console::services::session_guard;
use fleet_console::stores::auth_store::{self, AuthStore};
use fleet_console::utils::constants::{
    STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_COMPANY_ID, STORAGE_KEY_REFRESH_TOKEN,
};
use fleet_console::utils::storage;

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

#[wasm_bindgen_test]
fn persistir_y_cerrar_sesion_deja_el_storage_limpio() {
    let token = mint("u-1", "c-1", 2_000_000_000);
    let session = AuthStore::from_tokens(token, Some("r-1".to_string())).unwrap();

    auth_store::persist(&session);
    assert!(storage::load_raw(STORAGE_KEY_AUTH_TOKEN).is_some());
    assert!(storage::load_raw(STORAGE_KEY_REFRESH_TOKEN).is_some());
    assert!(storage::load_raw(STORAGE_KEY_COMPANY_ID).is_some());

    auth_store::clear_persisted();
    assert_eq!(storage::load_raw(STORAGE_KEY_AUTH_TOKEN), None);
    assert_eq!(storage::load_raw(STORAGE_KEY_REFRESH_TOKEN), None);
    assert_eq!(storage::load_raw(STORAGE_KEY_COMPANY_ID), None);
    assert!(auth_store::restore().is_none());
}

#[wasm_bindgen_test]
fn restaurar_con_token_valido_recupera_la_identidad() {
    let token = mint("u-7", "c-2", 2_000_000_000);
    let session = AuthStore::from_tokens(token.clone(), None).unwrap();
    auth_store::persist(&session);

    let restored = auth_store::restore().expect("la sesión debería restaurarse");
    assert!(restored.is_authenticated);
    assert_eq!(restored.token, Some(token));
    assert_eq!(restored.user_id.as_deref(), Some("u-7"));
    assert_eq!(restored.company_id.as_deref(), Some("c-2"));

    auth_store::clear_persisted();
}

#[wasm_bindgen_test]
fn restaurar_con_token_corrupto_limpia_la_sesion() {
    let _ = storage::save_raw(STORAGE_KEY_AUTH_TOKEN, "ya-no-es-un-jwt");
    let _ = storage::save_raw(STORAGE_KEY_REFRESH_TOKEN, "r-9");

    assert!(auth_store::restore().is_none());

    // Limpieza defensiva completa
    assert_eq!(storage::load_raw(STORAGE_KEY_AUTH_TOKEN), None);
    assert_eq!(storage::load_raw(STORAGE_KEY_REFRESH_TOKEN), None);
}

#[wasm_bindgen_test]
fn un_status_distinto_de_401_no_se_intercepta() {
    let _ = storage::save_raw(STORAGE_KEY_AUTH_TOKEN, "token-vigente");

    assert!(!session_guard::intercept_unauthorized(200));
    assert!(!session_guard::intercept_unauthorized(403));
    assert!(!session_guard::intercept_unauthorized(500));

    // El token sigue ahí: el guard no tocó nada
    assert_eq!(
        storage::load_raw(STORAGE_KEY_AUTH_TOKEN).as_deref(),
        Some("token-vigente")
    );

    auth_store::clear_persisted();
}

#[wasm_bindgen_test]
fn el_storage_distingue_crudo_de_json() {
    let _ = storage::save_raw("clave_cruda", "tal-cual");
    assert_eq!(storage::load_raw("clave_cruda").as_deref(), Some("tal-cual"));

    let _ = storage::save_json("clave_json", &vec![1u32, 2, 3]);
    assert_eq!(storage::load_json::<Vec<u32>>("clave_json"), Some(vec![1, 2, 3]));

    storage::remove_keys(&["clave_cruda", "clave_json"]);
    assert_eq!(storage::load_raw("clave_cruda"), None);
    assert_eq!(storage::load_raw("clave_json"), None);
}
