use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{disciplina, prova};

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

/// Change events pushed to connected clients over the stream WebSocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum WsEvent {
    DisciplinaCriada(disciplina::Model),
    DisciplinaAtualizada(disciplina::Model),
    DisciplinaExcluida { id: Uuid, user_id: Uuid },

    ProvaCriada(prova::Model),
    ProvaAtualizada(prova::Model),
    ProvaExcluida { id: Uuid, user_id: Uuid },

    Connected,
    Ping,
    Pong,
}

impl WsEvent {
    /// The owner of the changed row, used to fan events out per user.
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            WsEvent::DisciplinaCriada(d) | WsEvent::DisciplinaAtualizada(d) => Some(d.user_id),
            WsEvent::ProvaCriada(p) | WsEvent::ProvaAtualizada(p) => Some(p.user_id),
            WsEvent::DisciplinaExcluida { user_id, .. }
            | WsEvent::ProvaExcluida { user_id, .. } => Some(*user_id),
            WsEvent::Connected | WsEvent::Ping | WsEvent::Pong => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::situacao::Situacao;
    use chrono::{NaiveDate, Utc};

    fn disciplina(user_id: Uuid) -> disciplina::Model {
        let hoje = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        disciplina::Model {
            id: Uuid::new_v4(),
            user_id,
            nome: "Cálculo I".to_string(),
            semestre: "2026.1".to_string(),
            situacao: Situacao::NaoIniciado,
            data_inicio: hoje,
            data_fim: hoje,
            dia_1: None,
            horario_1_inicio: None,
            horario_1_final: None,
            dia_2: None,
            horario_2_inicio: None,
            horario_2_final: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn prova(user_id: Uuid) -> prova::Model {
        prova::Model {
            id: Uuid::new_v4(),
            user_id,
            disciplina_id: Uuid::new_v4(),
            titulo: "P1".to_string(),
            data: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            situacao: Situacao::NaoIniciado,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_id_por_variante() {
        let dono = Uuid::new_v4();

        assert_eq!(WsEvent::DisciplinaCriada(disciplina(dono)).user_id(), Some(dono));
        assert_eq!(
            WsEvent::DisciplinaAtualizada(disciplina(dono)).user_id(),
            Some(dono)
        );
        assert_eq!(WsEvent::ProvaCriada(prova(dono)).user_id(), Some(dono));
        assert_eq!(WsEvent::ProvaAtualizada(prova(dono)).user_id(), Some(dono));
        assert_eq!(
            WsEvent::DisciplinaExcluida {
                id: Uuid::new_v4(),
                user_id: dono
            }
            .user_id(),
            Some(dono)
        );
        assert_eq!(
            WsEvent::ProvaExcluida {
                id: Uuid::new_v4(),
                user_id: dono
            }
            .user_id(),
            Some(dono)
        );

        // Housekeeping frames belong to nobody and are never forwarded.
        assert_eq!(WsEvent::Connected.user_id(), None);
        assert_eq!(WsEvent::Ping.user_id(), None);
        assert_eq!(WsEvent::Pong.user_id(), None);
    }
}
