use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    entities::disciplina::{
        AtualizarDisciplina, CriarDisciplina, MetricasPainel, Model as Disciplina,
    },
    entities::prova::Model as Prova,
    entities::response::{ApiResponse, WsEvent},
    error::AppError,
    AppState,
};

/// GET /api/disciplinas - List the authenticated user's disciplinas
pub async fn list_disciplinas(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ApiResponse<Vec<Disciplina>>>, AppError> {
    let disciplinas = Disciplina::find_by_user(&state.db, user_id).await?;
    Ok(Json(ApiResponse::success(disciplinas)))
}

/// GET /api/disciplinas/metricas - Progress counts per situacao
pub async fn metricas(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ApiResponse<MetricasPainel>>, AppError> {
    let metricas = Disciplina::metricas(&state.db, user_id).await?;
    Ok(Json(ApiResponse::success(metricas)))
}

/// POST /api/disciplinas - Create a new disciplina
pub async fn create_disciplina(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CriarDisciplina>,
) -> Result<Json<ApiResponse<Disciplina>>, AppError> {
    if payload.nome.trim().is_empty() {
        return Err(AppError::BadRequest(
            "O nome da disciplina não pode ser vazio".to_string(),
        ));
    }

    let disciplina = Disciplina::create(&state.db, user_id, &payload).await?;

    state.broadcast(WsEvent::DisciplinaCriada(disciplina.clone()));

    tracing::info!(
        "Created disciplina: {} ({}) for user {}",
        disciplina.nome,
        disciplina.id,
        user_id
    );
    Ok(Json(ApiResponse::success(disciplina)))
}

/// GET /api/disciplinas/{id} - Get disciplina by ID
pub async fn get_disciplina(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Disciplina>>, AppError> {
    let disciplina = Disciplina::find_by_id_for_user(&state.db, id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Disciplina {} não encontrada", id)))?;

    Ok(Json(ApiResponse::success(disciplina)))
}

/// PUT /api/disciplinas/{id} - Update disciplina
pub async fn update_disciplina(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarDisciplina>,
) -> Result<Json<ApiResponse<Disciplina>>, AppError> {
    let disciplina = Disciplina::update(&state.db, id, user_id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Disciplina {} não encontrada", id)))?;

    state.broadcast(WsEvent::DisciplinaAtualizada(disciplina.clone()));

    tracing::info!("Updated disciplina: {} ({})", disciplina.nome, disciplina.id);
    Ok(Json(ApiResponse::success(disciplina)))
}

/// DELETE /api/disciplinas/{id} - Delete disciplina and its provas
pub async fn delete_disciplina(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    // Ownership check before touching dependent rows.
    let _ = Disciplina::find_by_id_for_user(&state.db, id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Disciplina {} não encontrada", id)))?;

    let provas_excluidas = Prova::delete_by_disciplina(&state.db, id).await?;
    tracing::debug!("Deleted {} provas for disciplina {}", provas_excluidas, id);

    let deleted = Disciplina::delete(&state.db, id, user_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!(
            "Disciplina {} não encontrada",
            id
        )));
    }

    state.broadcast(WsEvent::DisciplinaExcluida { id, user_id });

    tracing::info!("Deleted disciplina: {}", id);
    Ok(Json(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/disciplinas", get(list_disciplinas).post(create_disciplina))
        .route("/disciplinas/metricas", get(metricas))
        .route(
            "/disciplinas/{id}",
            get(get_disciplina)
                .put(update_disciplina)
                .delete(delete_disciplina),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::usuario;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    async fn estado_de_teste(dir: &tempfile::TempDir) -> AppState {
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let db = crate::db::create_connection(&url).await.unwrap();
        AppState::new(db, "segredo-de-teste".to_string())
    }

    async fn usuario_de_teste(state: &AppState, email: &str) -> Uuid {
        usuario::Model::create(&state.db, email, "hash", "sal")
            .await
            .unwrap()
            .id
    }

    fn payload(nome: &str) -> CriarDisciplina {
        CriarDisciplina {
            nome: nome.to_string(),
            semestre: "2026.1".to_string(),
            situacao: None,
            data_inicio: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            data_fim: NaiveDate::from_ymd_opt(2026, 7, 10).unwrap(),
            dia_1: None,
            horario_1_inicio: None,
            horario_1_final: None,
            dia_2: None,
            horario_2_inicio: None,
            horario_2_final: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejeita_nome_vazio() {
        let dir = tempdir().unwrap();
        let state = estado_de_teste(&dir).await;
        let user_id = usuario_de_teste(&state, "a@estuda.dev").await;

        let erro = create_disciplina(
            State(state),
            crate::auth::AuthUser(user_id),
            Json(payload("   ")),
        )
        .await
        .err()
        .unwrap();
        assert!(matches!(erro, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_rotas_isolam_usuarios() {
        let dir = tempdir().unwrap();
        let state = estado_de_teste(&dir).await;
        let alice = usuario_de_teste(&state, "alice@estuda.dev").await;
        let bruno = usuario_de_teste(&state, "bruno@estuda.dev").await;

        let criada = create_disciplina(
            State(state.clone()),
            crate::auth::AuthUser(alice),
            Json(payload("Física II")),
        )
        .await
        .unwrap()
        .0
        .data
        .unwrap();

        let erro = get_disciplina(
            State(state.clone()),
            crate::auth::AuthUser(bruno),
            Path(criada.id),
        )
        .await
        .err()
        .unwrap();
        assert!(matches!(erro, AppError::NotFound(_)));

        let erro = delete_disciplina(
            State(state.clone()),
            crate::auth::AuthUser(bruno),
            Path(criada.id),
        )
        .await
        .err()
        .unwrap();
        assert!(matches!(erro, AppError::NotFound(_)));

        // The owner still sees the row untouched.
        get_disciplina(State(state), crate::auth::AuthUser(alice), Path(criada.id))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_emite_evento_do_dono() {
        let dir = tempdir().unwrap();
        let state = estado_de_teste(&dir).await;
        let user_id = usuario_de_teste(&state, "a@estuda.dev").await;
        let mut rx = state.subscribe();

        create_disciplina(
            State(state),
            crate::auth::AuthUser(user_id),
            Json(payload("Cálculo I")),
        )
        .await
        .unwrap();

        // The stream socket fans events out by this id.
        let evento = rx.try_recv().unwrap();
        assert_eq!(evento.user_id(), Some(user_id));
        assert!(matches!(evento, WsEvent::DisciplinaCriada(_)));
    }
}
