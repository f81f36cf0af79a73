use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    entities::disciplina::Model as Disciplina,
    entities::prova::{AtualizarProva, CriarProva, Model as Prova},
    entities::response::{ApiResponse, WsEvent},
    error::AppError,
    AppState,
};

/// GET /api/provas - List the authenticated user's provas
pub async fn list_provas(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ApiResponse<Vec<Prova>>>, AppError> {
    let provas = Prova::find_by_user(&state.db, user_id).await?;
    Ok(Json(ApiResponse::success(provas)))
}

/// POST /api/provas - Create a new prova
pub async fn create_prova(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CriarProva>,
) -> Result<Json<ApiResponse<Prova>>, AppError> {
    if payload.titulo.trim().is_empty() {
        return Err(AppError::BadRequest(
            "O título da prova não pode ser vazio".to_string(),
        ));
    }

    // The disciplina must exist and belong to the same user.
    let _ = Disciplina::find_by_id_for_user(&state.db, payload.disciplina_id, user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Disciplina {} não encontrada",
                payload.disciplina_id
            ))
        })?;

    let prova = Prova::create(&state.db, user_id, &payload).await?;

    state.broadcast(WsEvent::ProvaCriada(prova.clone()));

    tracing::info!(
        "Created prova: {} ({}) in disciplina {}",
        prova.titulo,
        prova.id,
        prova.disciplina_id
    );
    Ok(Json(ApiResponse::success(prova)))
}

/// GET /api/provas/{id} - Get prova by ID
pub async fn get_prova(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Prova>>, AppError> {
    let prova = Prova::find_by_id_for_user(&state.db, id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Prova {} não encontrada", id)))?;

    Ok(Json(ApiResponse::success(prova)))
}

/// PUT /api/provas/{id} - Update prova
pub async fn update_prova(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarProva>,
) -> Result<Json<ApiResponse<Prova>>, AppError> {
    let prova = Prova::update(&state.db, id, user_id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Prova {} não encontrada", id)))?;

    state.broadcast(WsEvent::ProvaAtualizada(prova.clone()));

    tracing::info!("Updated prova: {} ({})", prova.titulo, prova.id);
    Ok(Json(ApiResponse::success(prova)))
}

/// DELETE /api/provas/{id} - Delete prova
pub async fn delete_prova(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let deleted = Prova::delete(&state.db, id, user_id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!("Prova {} não encontrada", id)));
    }

    state.broadcast(WsEvent::ProvaExcluida { id, user_id });

    tracing::info!("Deleted prova: {}", id);
    Ok(Json(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/provas", get(list_provas).post(create_prova))
        .route(
            "/provas/{id}",
            get(get_prova).put(update_prova).delete(delete_prova),
        )
}
