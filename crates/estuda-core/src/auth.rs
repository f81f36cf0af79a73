use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use base64::Engine;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{error::AppError, AppState};

const VALIDADE_DIAS: i64 = 30;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    exp: i64,
}

pub fn gerar_sal() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn hash_senha(senha: &str, sal: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sal.as_bytes());
    hasher.update(senha.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(hasher.finalize())
}

pub fn verificar_senha(senha: &str, sal: &str, esperado: &str) -> bool {
    hash_senha(senha, sal) == esperado
}

pub fn gerar_token(user_id: Uuid, segredo: &str) -> Result<String, AppError> {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now() + Duration::days(VALIDADE_DIAS)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(segredo.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Falha ao gerar token: {e}")))
}

pub fn validar_token(token: &str, segredo: &str) -> Result<Uuid, AppError> {
    let dados = decode::<Claims>(
        token,
        &DecodingKey::from_secret(segredo.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Token inválido ou expirado".to_string()))?;

    Ok(dados.claims.sub)
}

/// Extractor that authenticates a request from its Bearer token and yields
/// the owning user's id. Every per-user route goes through this.
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cabecalho = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized("Cabeçalho Authorization ausente".to_string())
            })?;

        let token = cabecalho
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Esperado token Bearer".to_string()))?;

        let user_id = validar_token(token, &state.jwt_secret)?;
        Ok(AuthUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_senha_deterministico() {
        let sal = "sal-fixo";
        assert_eq!(hash_senha("segredo", sal), hash_senha("segredo", sal));
        assert_ne!(hash_senha("segredo", sal), hash_senha("outra", sal));
        assert_ne!(hash_senha("segredo", sal), hash_senha("segredo", "outro-sal"));
    }

    #[test]
    fn test_verificar_senha() {
        let sal = gerar_sal();
        let hash = hash_senha("minha-senha", &sal);
        assert!(verificar_senha("minha-senha", &sal, &hash));
        assert!(!verificar_senha("errada", &sal, &hash));
    }

    #[test]
    fn test_token_ida_e_volta() {
        let user_id = Uuid::new_v4();
        let token = gerar_token(user_id, "segredo-de-teste").unwrap();
        let decodificado = validar_token(&token, "segredo-de-teste").unwrap();
        assert_eq!(decodificado, user_id);
    }

    #[test]
    fn test_token_segredo_errado() {
        let token = gerar_token(Uuid::new_v4(), "segredo-a").unwrap();
        assert!(validar_token(&token, "segredo-b").is_err());
    }

    #[test]
    fn test_token_adulterado() {
        assert!(validar_token("nao-e-um-jwt", "segredo").is_err());
    }
}
