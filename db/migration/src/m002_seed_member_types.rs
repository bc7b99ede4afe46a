use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The member tier set is closed; rows exist from the start and are
        // never created through the API.
        let insert = Query::insert()
            .into_table(MemberType::Table)
            .columns([
                MemberType::Id,
                MemberType::Discount,
                MemberType::PostsLimitPerMonth,
            ])
            .values_panic(["basic".into(), 2.5.into(), 20.into()])
            .values_panic(["business".into(), 7.5.into(), 100.into()])
            .to_owned();

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(MemberType::Table)
            .cond_where(
                Expr::col(MemberType::Id).is_in(["basic", "business"]),
            )
            .to_owned();

        manager.exec_stmt(delete).await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MemberType {
    Table,
    Id,
    Discount,
    PostsLimitPerMonth,
}
