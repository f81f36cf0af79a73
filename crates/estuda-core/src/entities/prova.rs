use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use super::situacao::Situacao;

/// An exam linked to a disciplina. Removed together with its disciplina.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "provas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub disciplina_id: Uuid,
    pub titulo: String,
    pub data: Date,
    pub situacao: Situacao,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::disciplina::Entity",
        from = "Column::DisciplinaId",
        to = "super::disciplina::Column::Id",
        on_delete = "Cascade"
    )]
    Disciplina,
    #[sea_orm(
        belongs_to = "super::usuario::Entity",
        from = "Column::UserId",
        to = "super::usuario::Column::Id",
        on_delete = "Cascade"
    )]
    Usuario,
}

impl Related<super::disciplina::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Disciplina.def()
    }
}

impl Related<super::usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// --- DTOs and Business Logic ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriarProva {
    pub disciplina_id: Uuid,
    pub titulo: String,
    pub data: Date,
    pub situacao: Option<Situacao>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtualizarProva {
    pub titulo: Option<String>,
    pub data: Option<Date>,
    pub situacao: Option<Situacao>,
}

impl Model {
    pub async fn find_by_user(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Data)
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
        payload: &CriarProva,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            disciplina_id: Set(payload.disciplina_id),
            titulo: Set(payload.titulo.clone()),
            data: Set(payload.data),
            situacao: Set(payload.situacao.unwrap_or_default()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model.insert(db).await
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        user_id: Uuid,
        payload: &AtualizarProva,
    ) -> Result<Option<Self>, DbErr> {
        let existing = Self::find_by_id_for_user(db, id, user_id).await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(titulo) = &payload.titulo {
            model.titulo = Set(titulo.clone());
        }
        if let Some(data) = payload.data {
            model.data = Set(data);
        }
        if let Some(situacao) = payload.situacao {
            model.situacao = Set(situacao);
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

    pub async fn delete_by_disciplina(
        db: &DatabaseConnection,
        disciplina_id: Uuid,
    ) -> Result<u64, DbErr> {
        let result = Entity::delete_many()
            .filter(Column::DisciplinaId.eq(disciplina_id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{disciplina, usuario};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    async fn db_de_teste(dir: &tempfile::TempDir) -> DatabaseConnection {
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        crate::db::create_connection(&url).await.unwrap()
    }

    async fn disciplina_de_teste(db: &DatabaseConnection, user_id: Uuid) -> Uuid {
        let payload = disciplina::CriarDisciplina {
            nome: "Banco de Dados".to_string(),
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
        };
        disciplina::Model::create(db, user_id, &payload).await.unwrap().id
    }

    #[tokio::test]
    async fn test_crud_prova() {
        let dir = tempdir().unwrap();
        let db = db_de_teste(&dir).await;
        let user_id = usuario::Model::create(&db, "p@estuda.dev", "hash", "sal")
            .await
            .unwrap()
            .id;
        let disciplina_id = disciplina_de_teste(&db, user_id).await;

        let criada = Model::create(
            &db,
            user_id,
            &CriarProva {
                disciplina_id,
                titulo: "P1".to_string(),
                data: NaiveDate::from_ymd_opt(2026, 4, 20).unwrap(),
                situacao: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(criada.situacao, Situacao::NaoIniciado);

        let atualizada = Model::update(
            &db,
            criada.id,
            user_id,
            &AtualizarProva {
                situacao: Some(Situacao::Concluido),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(atualizada.situacao, Situacao::Concluido);

        assert!(Model::delete(&db, criada.id, user_id).await.unwrap());
        assert!(Model::find_by_user(&db, user_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listagem_ordenada_por_data() {
        let dir = tempdir().unwrap();
        let db = db_de_teste(&dir).await;
        let user_id = usuario::Model::create(&db, "q@estuda.dev", "hash", "sal")
            .await
            .unwrap()
            .id;
        let disciplina_id = disciplina_de_teste(&db, user_id).await;

        for (titulo, dia) in [("P2", 25), ("P1", 10), ("P3", 30)] {
            Model::create(
                &db,
                user_id,
                &CriarProva {
                    disciplina_id,
                    titulo: titulo.to_string(),
                    data: NaiveDate::from_ymd_opt(2026, 4, dia).unwrap(),
                    situacao: None,
                },
            )
            .await
            .unwrap();
        }

        let provas = Model::find_by_user(&db, user_id).await.unwrap();
        let titulos: Vec<_> = provas.iter().map(|p| p.titulo.as_str()).collect();
        assert_eq!(titulos, vec!["P1", "P2", "P3"]);
    }

    #[tokio::test]
    async fn test_delete_by_disciplina() {
        let dir = tempdir().unwrap();
        let db = db_de_teste(&dir).await;
        let user_id = usuario::Model::create(&db, "r@estuda.dev", "hash", "sal")
            .await
            .unwrap()
            .id;
        let disciplina_id = disciplina_de_teste(&db, user_id).await;
        let outra_disciplina = disciplina_de_teste(&db, user_id).await;

        for d_id in [disciplina_id, disciplina_id, outra_disciplina] {
            Model::create(
                &db,
                user_id,
                &CriarProva {
                    disciplina_id: d_id,
                    titulo: "Prova".to_string(),
                    data: NaiveDate::from_ymd_opt(2026, 5, 5).unwrap(),
                    situacao: None,
                },
            )
            .await
            .unwrap();
        }

        let removidas = Model::delete_by_disciplina(&db, disciplina_id).await.unwrap();
        assert_eq!(removidas, 2);

        let restantes = Model::find_by_user(&db, user_id).await.unwrap();
        assert_eq!(restantes.len(), 1);
        assert_eq!(restantes[0].disciplina_id, outra_disciplina);
    }
}
