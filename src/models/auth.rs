use serde::{Deserialize, Serialize};

/// Solicitud de OTP por teléfono
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OtpRequest {
    pub phone: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OtpVerifyRequest {
    pub phone: String,
    pub otp: String,
}

/// Tokens emitidos al verificar el OTP
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OtpTokens {
    pub token: String,
    #[serde(alias = "refreshToken")]
    pub refresh_token: Option<String>,
}
