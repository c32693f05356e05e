// ============================================================================
// JWT - Decodificación de claims del lado cliente
// ============================================================================
// Solo se inspecciona el payload (identidad + expiración); la firma la
// verifica el backend. Un fallo de decodificación se trata como sesión
// corrupta.
// ============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum JwtError {
    #[error("el token no tiene formato JWT (se esperaban 3 segmentos)")]
    Format,
    #[error("el payload del token no es base64url válido")]
    Decode,
    #[error("los claims del token no tienen la forma esperada")]
    Claims,
}

/// Claims de identidad embebidos en el token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(alias = "userId")]
    pub user_id: String,
    #[serde(alias = "companyId", default)]
    pub company_id: Option<String>,
    /// Expiración en segundos epoch
    pub exp: i64,
}

/// Decodifica los claims del payload de un JWT (sin verificar firma)
pub fn decode_claims(token: &str) -> Result<TokenClaims, JwtError> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return Err(JwtError::Format),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| JwtError::Decode)?;

    serde_json::from_slice(&bytes).map_err(|_| JwtError::Claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mint(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{}.{}.firma", header, body)
    }

    #[test]
    fn decodificar_devuelve_la_identidad_con_la_que_se_emitio() {
        let token = mint(&serde_json::json!({
            "user_id": "u-17",
            "company_id": "c-3",
            "exp": 1_900_000_000i64,
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_id, "u-17");
        assert_eq!(claims.company_id.as_deref(), Some("c-3"));
        assert_eq!(claims.exp, 1_900_000_000);
    }

    #[test]
    fn acepta_las_variantes_camel_case_de_los_claims() {
        let token = mint(&serde_json::json!({
            "userId": "u-9",
            "companyId": "c-1",
            "exp": 1_900_000_000i64,
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_id, "u-9");
        assert_eq!(claims.company_id.as_deref(), Some("c-1"));
    }

    #[test]
    fn company_id_puede_faltar() {
        let token = mint(&serde_json::json!({ "user_id": "u-1", "exp": 10i64 }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.company_id, None);
    }

    #[test]
    fn token_sin_tres_segmentos_falla_con_format() {
        assert_eq!(decode_claims("abc.def"), Err(JwtError::Format));
        assert_eq!(decode_claims("a.b.c.d"), Err(JwtError::Format));
        assert_eq!(decode_claims(""), Err(JwtError::Format));
    }

    #[test]
    fn payload_no_base64_falla_con_decode() {
        assert_eq!(decode_claims("h.¡¡¡.s"), Err(JwtError::Decode));
    }

    #[test]
    fn payload_sin_claims_obligatorios_falla_con_claims() {
        let token = mint(&serde_json::json!({ "sub": "otro-esquema" }));
        assert_eq!(decode_claims(&token), Err(JwtError::Claims));
    }
}
