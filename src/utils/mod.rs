// Utils compartidos

pub mod constants;
pub mod fetch_seq;
pub mod jwt;
pub mod storage;

pub use constants::*;
pub use fetch_seq::FetchSeq;
pub use jwt::{decode_claims, JwtError, TokenClaims};
pub use storage::*;
