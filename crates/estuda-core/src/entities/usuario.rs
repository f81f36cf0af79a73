use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub senha_hash: String,
    pub sal: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::disciplina::Entity")]
    Disciplinas,
    #[sea_orm(has_many = "super::prova::Entity")]
    Provas,
}

impl Related<super::disciplina::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Disciplinas.def()
    }
}

impl Related<super::prova::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Provas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// --- DTOs and Business Logic ---

/// Public projection of a user, safe to return to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perfil {
    pub id: Uuid,
    pub email: String,
}

impl From<Model> for Perfil {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Credenciais {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RespostaLogin {
    pub token: String,
    pub usuario: Perfil,
}

impl Model {
    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn create(
        db: &DatabaseConnection,
        email: &str,
        senha_hash: &str,
        sal: &str,
    ) -> Result<Self, DbErr> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            senha_hash: Set(senha_hash.to_string()),
            sal: Set(sal.to_string()),
            created_at: Set(Utc::now()),
        };

        model.insert(db).await
    }
}
