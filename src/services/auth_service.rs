use crate::models::{OtpRequest, OtpTokens, OtpVerifyRequest};
use crate::services::{ApiClient, ApiError};

/// Solicitar el envío de un OTP al teléfono indicado
pub async fn request_otp(client: &ApiClient, phone: &str) -> Result<(), ApiError> {
    log::info!("🔐 Solicitando OTP para {}", phone);
    let request = OtpRequest { phone: phone.to_string() };
    client.post_empty("/auth/request-otp", &request, true).await
}

/// Verificar el OTP y obtener los tokens de sesión
pub async fn verify_otp(
    client: &ApiClient,
    phone: &str,
    otp: &str,
) -> Result<OtpTokens, ApiError> {
    log::info!("🔐 Verificando OTP para {}", phone);
    let request = OtpVerifyRequest {
        phone: phone.to_string(),
        otp: otp.to_string(),
    };
    client.post("/auth/verify-otp", &request).await
}
