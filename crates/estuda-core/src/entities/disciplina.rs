use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use super::situacao::Situacao;

/// A tracked academic subject. Each row belongs to exactly one user and
/// carries up to two weekly meeting slots (day label + "HH:MM" times).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "disciplinas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub nome: String,
    pub semestre: String,
    pub situacao: Situacao,
    pub data_inicio: Date,
    pub data_fim: Date,
    pub dia_1: Option<String>,
    pub horario_1_inicio: Option<String>,
    pub horario_1_final: Option<String>,
    pub dia_2: Option<String>,
    pub horario_2_inicio: Option<String>,
    pub horario_2_final: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usuario::Entity",
        from = "Column::UserId",
        to = "super::usuario::Column::Id",
        on_delete = "Cascade"
    )]
    Usuario,
    #[sea_orm(has_many = "super::prova::Entity")]
    Provas,
}

impl Related<super::usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl Related<super::prova::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Provas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// --- DTOs and Business Logic ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriarDisciplina {
    pub nome: String,
    pub semestre: String,
    pub situacao: Option<Situacao>,
    pub data_inicio: Date,
    pub data_fim: Date,
    pub dia_1: Option<String>,
    pub horario_1_inicio: Option<String>,
    pub horario_1_final: Option<String>,
    pub dia_2: Option<String>,
    pub horario_2_inicio: Option<String>,
    pub horario_2_final: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtualizarDisciplina {
    pub nome: Option<String>,
    pub semestre: Option<String>,
    pub situacao: Option<Situacao>,
    pub data_inicio: Option<Date>,
    pub data_fim: Option<Date>,
    pub dia_1: Option<String>,
    pub horario_1_inicio: Option<String>,
    pub horario_1_final: Option<String>,
    pub dia_2: Option<String>,
    pub horario_2_inicio: Option<String>,
    pub horario_2_final: Option<String>,
}

/// Aggregate progress counts for the painel, per user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricasPainel {
    pub nao_iniciado: i64,
    pub em_andamento: i64,
    pub concluido: i64,
    pub total: i64,
}

impl Model {
    pub async fn find_by_user(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::UpdatedAt)
            .all(db)
            .await
    }

    pub async fn find_by_id_for_user(
        db: &DatabaseConnection,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id)
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    pub async fn create(
        db: &DatabaseConnection,
        user_id: Uuid,
        payload: &CriarDisciplina,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            nome: Set(payload.nome.clone()),
            semestre: Set(payload.semestre.clone()),
            situacao: Set(payload.situacao.unwrap_or_default()),
            data_inicio: Set(payload.data_inicio),
            data_fim: Set(payload.data_fim),
            dia_1: Set(payload.dia_1.clone()),
            horario_1_inicio: Set(payload.horario_1_inicio.clone()),
            horario_1_final: Set(payload.horario_1_final.clone()),
            dia_2: Set(payload.dia_2.clone()),
            horario_2_inicio: Set(payload.horario_2_inicio.clone()),
            horario_2_final: Set(payload.horario_2_final.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model.insert(db).await
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        user_id: Uuid,
        payload: &AtualizarDisciplina,
    ) -> Result<Option<Self>, DbErr> {
        let existing = Self::find_by_id_for_user(db, id, user_id).await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(nome) = &payload.nome {
            model.nome = Set(nome.clone());
        }
        if let Some(semestre) = &payload.semestre {
            model.semestre = Set(semestre.clone());
        }
        if let Some(situacao) = payload.situacao {
            model.situacao = Set(situacao);
        }
        if let Some(data_inicio) = payload.data_inicio {
            model.data_inicio = Set(data_inicio);
        }
        if let Some(data_fim) = payload.data_fim {
            model.data_fim = Set(data_fim);
        }
        if let Some(dia_1) = &payload.dia_1 {
            model.dia_1 = Set(Some(dia_1.clone()));
        }
        if let Some(horario) = &payload.horario_1_inicio {
            model.horario_1_inicio = Set(Some(horario.clone()));
        }
        if let Some(horario) = &payload.horario_1_final {
            model.horario_1_final = Set(Some(horario.clone()));
        }
        if let Some(dia_2) = &payload.dia_2 {
            model.dia_2 = Set(Some(dia_2.clone()));
        }
        if let Some(horario) = &payload.horario_2_inicio {
            model.horario_2_inicio = Set(Some(horario.clone()));
        }
        if let Some(horario) = &payload.horario_2_final {
            model.horario_2_final = Set(Some(horario.clone()));
        }
        model.updated_at = Set(Utc::now());

        let updated = model.update(db).await?;
        Ok(Some(updated))
    }

    pub async fn delete(
        db: &DatabaseConnection,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, DbErr> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(user_id))
            .exec(db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn metricas(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<MetricasPainel, DbErr> {
        let mut metricas = MetricasPainel::default();

        for situacao in Situacao::TODAS {
            let contagem = Entity::find()
                .filter(Column::UserId.eq(user_id))
                .filter(Column::Situacao.eq(situacao))
                .count(db)
                .await? as i64;

            match situacao {
                Situacao::NaoIniciado => metricas.nao_iniciado = contagem,
                Situacao::EmAndamento => metricas.em_andamento = contagem,
                Situacao::Concluido => metricas.concluido = contagem,
            }
            metricas.total += contagem;
        }

        Ok(metricas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::usuario;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    async fn db_de_teste(dir: &tempfile::TempDir) -> DatabaseConnection {
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        crate::db::create_connection(&url).await.unwrap()
    }

    fn payload_basico(nome: &str) -> CriarDisciplina {
        CriarDisciplina {
            nome: nome.to_string(),
            semestre: "2026.1".to_string(),
            situacao: None,
            data_inicio: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            data_fim: NaiveDate::from_ymd_opt(2026, 7, 10).unwrap(),
            dia_1: Some("Segunda".to_string()),
            horario_1_inicio: Some("19:00".to_string()),
            horario_1_final: Some("20:40".to_string()),
            dia_2: None,
            horario_2_inicio: None,
            horario_2_final: None,
        }
    }

    async fn usuario_de_teste(db: &DatabaseConnection, email: &str) -> Uuid {
        usuario::Model::create(db, email, "hash", "sal").await.unwrap().id
    }

    #[tokio::test]
    async fn test_crud_disciplina() {
        let dir = tempdir().unwrap();
        let db = db_de_teste(&dir).await;
        let user_id = usuario_de_teste(&db, "a@estuda.dev").await;

        let criada = Model::create(&db, user_id, &payload_basico("Cálculo I"))
            .await
            .unwrap();
        assert_eq!(criada.nome, "Cálculo I");
        assert_eq!(criada.situacao, Situacao::NaoIniciado);

        let todas = Model::find_by_user(&db, user_id).await.unwrap();
        assert_eq!(todas.len(), 1);

        let atualizada = Model::update(
            &db,
            criada.id,
            user_id,
            &AtualizarDisciplina {
                situacao: Some(Situacao::EmAndamento),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(atualizada.situacao, Situacao::EmAndamento);
        assert!(atualizada.updated_at >= criada.updated_at);

        assert!(Model::delete(&db, criada.id, user_id).await.unwrap());
        assert!(Model::find_by_user(&db, user_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_isolamento_entre_usuarios() {
        let dir = tempdir().unwrap();
        let db = db_de_teste(&dir).await;
        let alice = usuario_de_teste(&db, "alice@estuda.dev").await;
        let bruno = usuario_de_teste(&db, "bruno@estuda.dev").await;

        let da_alice = Model::create(&db, alice, &payload_basico("Física II"))
            .await
            .unwrap();

        // Another user can neither see nor touch the row.
        assert!(Model::find_by_user(&db, bruno).await.unwrap().is_empty());
        assert!(Model::find_by_id_for_user(&db, da_alice.id, bruno)
            .await
            .unwrap()
            .is_none());
        assert!(Model::update(&db, da_alice.id, bruno, &AtualizarDisciplina::default())
            .await
            .unwrap()
            .is_none());
        assert!(!Model::delete(&db, da_alice.id, bruno).await.unwrap());

        assert!(Model::find_by_id_for_user(&db, da_alice.id, alice)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_metricas_por_situacao() {
        let dir = tempdir().unwrap();
        let db = db_de_teste(&dir).await;
        let user_id = usuario_de_teste(&db, "c@estuda.dev").await;
        let outro = usuario_de_teste(&db, "d@estuda.dev").await;

        for (nome, situacao) in [
            ("A", Situacao::NaoIniciado),
            ("B", Situacao::EmAndamento),
            ("C", Situacao::EmAndamento),
            ("D", Situacao::Concluido),
        ] {
            let mut payload = payload_basico(nome);
            payload.situacao = Some(situacao);
            Model::create(&db, user_id, &payload).await.unwrap();
        }
        // Rows from other users never count.
        Model::create(&db, outro, &payload_basico("E")).await.unwrap();

        let metricas = Model::metricas(&db, user_id).await.unwrap();
        assert_eq!(
            metricas,
            MetricasPainel {
                nao_iniciado: 1,
                em_andamento: 2,
                concluido: 1,
                total: 4,
            }
        );
    }
}
