use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create usuarios table
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Usuarios::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Usuarios::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Usuarios::SenhaHash).string().not_null())
                    .col(ColumnDef::new(Usuarios::Sal).string().not_null())
                    .col(ColumnDef::new(Usuarios::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create disciplinas table
        manager
            .create_table(
                Table::create()
                    .table(Disciplinas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Disciplinas::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Disciplinas::UserId).uuid().not_null())
                    .col(ColumnDef::new(Disciplinas::Nome).string().not_null())
                    .col(ColumnDef::new(Disciplinas::Semestre).string().not_null())
                    .col(
                        ColumnDef::new(Disciplinas::Situacao)
                            .string()
                            .not_null()
                            .default("Não Iniciado"),
                    )
                    .col(ColumnDef::new(Disciplinas::DataInicio).date().not_null())
                    .col(ColumnDef::new(Disciplinas::DataFim).date().not_null())
                    .col(ColumnDef::new(Disciplinas::Dia1).string())
                    .col(ColumnDef::new(Disciplinas::Horario1Inicio).string())
                    .col(ColumnDef::new(Disciplinas::Horario1Final).string())
                    .col(ColumnDef::new(Disciplinas::Dia2).string())
                    .col(ColumnDef::new(Disciplinas::Horario2Inicio).string())
                    .col(ColumnDef::new(Disciplinas::Horario2Final).string())
                    .col(
                        ColumnDef::new(Disciplinas::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Disciplinas::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_disciplinas_user_id")
                            .from(Disciplinas::Table, Disciplinas::UserId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create provas table
        manager
            .create_table(
                Table::create()
                    .table(Provas::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Provas::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Provas::UserId).uuid().not_null())
                    .col(ColumnDef::new(Provas::DisciplinaId).uuid().not_null())
                    .col(ColumnDef::new(Provas::Titulo).string().not_null())
                    .col(ColumnDef::new(Provas::Data).date().not_null())
                    .col(
                        ColumnDef::new(Provas::Situacao)
                            .string()
                            .not_null()
                            .default("Não Iniciado"),
                    )
                    .col(ColumnDef::new(Provas::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Provas::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provas_disciplina_id")
                            .from(Provas::Table, Provas::DisciplinaId)
                            .to(Disciplinas::Table, Disciplinas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provas_user_id")
                            .from(Provas::Table, Provas::UserId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_disciplinas_user_id")
                    .table(Disciplinas::Table)
                    .col(Disciplinas::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_disciplinas_situacao")
                    .table(Disciplinas::Table)
                    .col(Disciplinas::Situacao)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_provas_user_id")
                    .table(Provas::Table)
                    .col(Provas::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_provas_disciplina_id")
                    .table(Provas::Table)
                    .col(Provas::DisciplinaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Provas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Disciplinas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Usuarios {
    Table,
    Id,
    Email,
    SenhaHash,
    Sal,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Disciplinas {
    Table,
    Id,
    UserId,
    Nome,
    Semestre,
    Situacao,
    DataInicio,
    DataFim,
    #[sea_orm(iden = "dia_1")]
    Dia1,
    #[sea_orm(iden = "horario_1_inicio")]
    Horario1Inicio,
    #[sea_orm(iden = "horario_1_final")]
    Horario1Final,
    #[sea_orm(iden = "dia_2")]
    Dia2,
    #[sea_orm(iden = "horario_2_inicio")]
    Horario2Inicio,
    #[sea_orm(iden = "horario_2_final")]
    Horario2Final,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Provas {
    Table,
    Id,
    UserId,
    DisciplinaId,
    Titulo,
    Data,
    Situacao,
    CreatedAt,
    UpdatedAt,
}
