use axum::{
    extract::State,
    response::Json,
    routing::post,
    Router,
};

use crate::{
    auth,
    entities::response::ApiResponse,
    entities::usuario::{Credenciais, Perfil, RespostaLogin, Model as Usuario},
    error::AppError,
    AppState,
};

/// POST /api/auth/registrar - Create a new account and issue a token
pub async fn registrar(
    State(state): State<AppState>,
    Json(payload): Json<Credenciais>,
) -> Result<Json<ApiResponse<RespostaLogin>>, AppError> {
    let email = payload.email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("Email inválido".to_string()));
    }
    if payload.senha.len() < 6 {
        return Err(AppError::BadRequest(
            "A senha deve ter pelo menos 6 caracteres".to_string(),
        ));
    }

    if Usuario::find_by_email(&state.db, &email).await?.is_some() {
        return Err(AppError::Conflict("Email já cadastrado".to_string()));
    }

    let sal = auth::gerar_sal();
    let senha_hash = auth::hash_senha(&payload.senha, &sal);
    let usuario = Usuario::create(&state.db, &email, &senha_hash, &sal).await?;

    let token = auth::gerar_token(usuario.id, &state.jwt_secret)?;
    tracing::info!("Registered user: {} ({})", usuario.email, usuario.id);

    Ok(Json(ApiResponse::success(RespostaLogin {
        token,
        usuario: Perfil::from(usuario),
    })))
}

/// POST /api/auth/login - Verify credentials and issue a token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Credenciais>,
) -> Result<Json<ApiResponse<RespostaLogin>>, AppError> {
    let email = payload.email.trim().to_lowercase();

    // Unknown email and wrong password answer identically.
    let usuario = Usuario::find_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Email ou senha incorretos".to_string()))?;

    if !auth::verificar_senha(&payload.senha, &usuario.sal, &usuario.senha_hash) {
        return Err(AppError::Unauthorized(
            "Email ou senha incorretos".to_string(),
        ));
    }

    let token = auth::gerar_token(usuario.id, &state.jwt_secret)?;
    tracing::info!("Login: {} ({})", usuario.email, usuario.id);

    Ok(Json(ApiResponse::success(RespostaLogin {
        token,
        usuario: Perfil::from(usuario),
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/registrar", post(registrar))
        .route("/auth/login", post(login))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use tempfile::tempdir;

    async fn estado_de_teste(dir: &tempfile::TempDir) -> AppState {
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let db = crate::db::create_connection(&url).await.unwrap();
        AppState::new(db, "segredo-de-teste".to_string())
    }

    fn credenciais(email: &str, senha: &str) -> Json<Credenciais> {
        Json(Credenciais {
            email: email.to_string(),
            senha: senha.to_string(),
        })
    }

    #[tokio::test]
    async fn test_registrar_valida_entrada() {
        let dir = tempdir().unwrap();
        let state = estado_de_teste(&dir).await;

        let erro = registrar(State(state.clone()), credenciais("sem-arroba", "123456"))
            .await
            .err()
            .unwrap();
        assert!(matches!(erro, AppError::BadRequest(_)));

        let erro = registrar(State(state), credenciais("a@estuda.dev", "curta"))
            .await
            .err()
            .unwrap();
        assert!(matches!(erro, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_registrar_email_duplicado() {
        let dir = tempdir().unwrap();
        let state = estado_de_teste(&dir).await;

        registrar(State(state.clone()), credenciais("a@estuda.dev", "123456"))
            .await
            .unwrap();

        // Same address with different case and spacing still collides.
        let erro = registrar(State(state), credenciais("  A@Estuda.Dev ", "654321"))
            .await
            .err()
            .unwrap();
        assert!(matches!(erro, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_login_erros_identicos() {
        let dir = tempdir().unwrap();
        let state = estado_de_teste(&dir).await;

        registrar(State(state.clone()), credenciais("a@estuda.dev", "123456"))
            .await
            .unwrap();

        let desconhecido = login(State(state.clone()), credenciais("b@estuda.dev", "123456"))
            .await
            .err()
            .unwrap();
        let senha_errada = login(State(state), credenciais("a@estuda.dev", "errada"))
            .await
            .err()
            .unwrap();

        // The response must not reveal whether the account exists.
        match (desconhecido, senha_errada) {
            (AppError::Unauthorized(m1), AppError::Unauthorized(m2)) => assert_eq!(m1, m2),
            outros => panic!("esperava dois 401, veio {outros:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_emite_token_valido() {
        let dir = tempdir().unwrap();
        let state = estado_de_teste(&dir).await;

        let registro = registrar(State(state.clone()), credenciais("a@estuda.dev", "123456"))
            .await
            .unwrap()
            .0
            .data
            .unwrap();

        let resposta = login(State(state.clone()), credenciais("a@estuda.dev", "123456"))
            .await
            .unwrap()
            .0
            .data
            .unwrap();

        let user_id = auth::validar_token(&resposta.token, &state.jwt_secret).unwrap();
        assert_eq!(user_id, registro.usuario.id);
    }
}
