// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Resuelve la raíz de API (actual vs legacy), adjunta el bearer token y
// clasifica la respuesta. El sobre {success, data, message} se valida aquí,
// una sola vez. Un solo intento por llamada, sin reintentos.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::Envelope;
use crate::services::{notify, session_guard};

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("error de red: {0}")]
    Network(String),
    #[error("el servidor devolvió una respuesta no-JSON (HTTP {status})")]
    NonJson { status: u16 },
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("sesión expirada")]
    Unauthorized,
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Cliente API. El token llega por inyección explícita al construirlo;
/// el cliente nunca lee la sesión de forma ambiental.
#[derive(Clone)]
pub struct ApiClient {
    root: String,
    token: Option<String>,
}

impl ApiClient {
    /// Cliente apuntando a la raíz que corresponde a la ruta de navegación
    /// actual (backend legacy bajo el prefijo legacy, actual en el resto)
    pub fn new(token: Option<String>) -> Self {
        let pathname = current_pathname();
        Self {
            root: CONFIG.api_root_for(&pathname).to_string(),
            token,
        }
    }

    /// Cliente con raíz explícita
    pub fn with_root(root: impl Into<String>, token: Option<String>) -> Self {
        Self { root: root.into(), token }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send::<()>(Method::Get, path, None).await?;
        self.into_data(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(Method::Post, path, Some(body)).await?;
        self.into_data(response).await
    }

    /// POST cuyo resultado interesa solo como éxito/fracaso (altas, updates)
    pub async fn post_empty<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        notify_success: bool,
    ) -> Result<(), ApiError> {
        let response = self.send(Method::Post, path, Some(body)).await?;
        self.into_ok(response, notify_success).await
    }

    pub async fn put_empty<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        notify_success: bool,
    ) -> Result<(), ApiError> {
        let response = self.send(Method::Put, path, Some(body)).await?;
        self.into_ok(response, notify_success).await
    }

    pub async fn delete(&self, path: &str, notify_success: bool) -> Result<(), ApiError> {
        let response = self.send::<()>(Method::Delete, path, None).await?;
        self.into_ok(response, notify_success).await
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.root, path);

        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        // Sin token no se manda el header Authorization
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &bearer_value(token));
        }

        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(format!("error serializando el body: {}", e)))?,
            None => builder
                .header("Content-Type", "application/json")
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = request.send().await.map_err(|e| {
            log::error!("❌ Error de red en {:?} {}: {}", method, url, e);
            ApiError::Network(e.to_string())
        })?;

        self.check(response, &url).await
    }

    /// Guard de sesión + clasificación no-JSON / no-2xx. Corre en TODOS los
    /// verbos.
    async fn check(&self, response: Response, url: &str) -> Result<Response, ApiError> {
        let status = response.status();

        if session_guard::intercept_unauthorized(status) {
            return Err(ApiError::Unauthorized);
        }

        let content_type = response.headers().get("content-type").unwrap_or_default();
        if !is_json(&content_type) {
            log::error!("❌ Respuesta no-JSON de {} (HTTP {}, content-type: {})", url, status, content_type);
            return Err(ApiError::NonJson { status });
        }

        if !response.ok() {
            let message = response
                .json::<Envelope<serde_json::Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            log::error!("❌ Error del servidor en {}: {}", url, message);
            notify::error(&message);
            return Err(ApiError::Server { status, message });
        }

        Ok(response)
    }

    async fn into_data<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let envelope = response
            .json::<Envelope<T>>()
            .await
            .map_err(|_| ApiError::NonJson { status })?;
        match envelope_data(envelope, status) {
            Ok(data) => Ok(data),
            Err(error) => {
                if let ApiError::Server { message, .. } = &error {
                    notify::error(message);
                }
                Err(error)
            }
        }
    }

    async fn into_ok(&self, response: Response, notify_success: bool) -> Result<(), ApiError> {
        let status = response.status();
        let envelope = response
            .json::<Envelope<serde_json::Value>>()
            .await
            .map_err(|_| ApiError::NonJson { status })?;
        match envelope_ok(envelope, status) {
            Ok(message) => {
                if notify_success {
                    notify::success(message.as_deref().unwrap_or("Operación realizada"));
                }
                Ok(())
            }
            Err(error) => {
                if let ApiError::Server { message, .. } = &error {
                    notify::error(message);
                }
                Err(error)
            }
        }
    }
}

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn bearer_value(token: &str) -> String {
    format!("Bearer {}", token)
}

fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(str::trim)
        .is_some_and(|mime| mime.eq_ignore_ascii_case("application/json"))
}

/// Sobre con éxito y data presentes, o error del servidor con su mensaje
fn envelope_data<T>(envelope: Envelope<T>, status: u16) -> Result<T, ApiError> {
    if !envelope.success {
        let message = envelope
            .message
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(ApiError::Server { status, message });
    }
    envelope.data.ok_or(ApiError::Server {
        status,
        message: "respuesta sin datos".to_string(),
    })
}

/// Sobre con solo el flag de éxito; devuelve el mensaje del servidor si lo hay
fn envelope_ok(
    envelope: Envelope<serde_json::Value>,
    status: u16,
) -> Result<Option<String>, ApiError> {
    if !envelope.success {
        let message = envelope
            .message
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(ApiError::Server { status, message });
    }
    Ok(envelope.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_header_es_exactamente_bearer_token() {
        assert_eq!(bearer_value("abc123"), "Bearer abc123");
    }

    #[test]
    fn content_type_json_con_charset_es_json() {
        assert!(is_json("application/json"));
        assert!(is_json("application/json; charset=utf-8"));
        assert!(is_json("Application/JSON"));
    }

    #[test]
    fn html_y_vacio_no_son_json() {
        assert!(!is_json("text/html; charset=utf-8"));
        assert!(!is_json("text/plain"));
        assert!(!is_json(""));
    }

    #[test]
    fn sobre_exitoso_entrega_la_data() {
        let envelope = Envelope { success: true, data: Some(7u32), message: None };
        assert_eq!(envelope_data(envelope, 200), Ok(7));
    }

    #[test]
    fn sobre_con_success_false_lleva_el_mensaje_del_servidor() {
        let envelope: Envelope<u32> = Envelope {
            success: false,
            data: None,
            message: Some("placa duplicada".to_string()),
        };
        assert_eq!(
            envelope_data(envelope, 422),
            Err(ApiError::Server { status: 422, message: "placa duplicada".to_string() })
        );
    }

    #[test]
    fn sobre_sin_mensaje_usa_el_status_http() {
        let envelope: Envelope<u32> = Envelope { success: false, data: None, message: None };
        assert_eq!(
            envelope_data(envelope, 500),
            Err(ApiError::Server { status: 500, message: "HTTP 500".to_string() })
        );
    }

    #[test]
    fn sobre_exitoso_sin_data_es_error_para_lecturas() {
        let envelope: Envelope<u32> = Envelope { success: true, data: None, message: None };
        assert!(matches!(envelope_data(envelope, 200), Err(ApiError::Server { .. })));
    }

    #[test]
    fn sobre_exitoso_sin_data_basta_para_escrituras() {
        let envelope: Envelope<serde_json::Value> = Envelope {
            success: true,
            data: None,
            message: Some("creado".to_string()),
        };
        assert_eq!(envelope_ok(envelope, 201), Ok(Some("creado".to_string())));
    }
}
