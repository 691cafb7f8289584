use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseBackend, DatabaseConnection};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use tracing::info;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_categories_table::Migration),
            Box::new(m20240101_000002_create_units_table::Migration),
            Box::new(m20240101_000003_create_goods_table::Migration),
        ]
    }
}

/// Auto-increment primary key column.
///
/// SQLite only auto-increments an `INTEGER PRIMARY KEY` (which is 64-bit);
/// every other backend gets a `BIGINT`.
fn id_column<T: IntoIden>(manager: &SchemaManager, name: T) -> ColumnDef {
    let mut col = ColumnDef::new(name);
    match manager.get_database_backend() {
        DatabaseBackend::Sqlite => col.integer(),
        _ => col.big_integer(),
    };
    col.not_null().auto_increment().primary_key();
    col
}

// Migration implementations

mod m20240101_000001_create_categories_table {

    use super::id_column;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_categories_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(&mut id_column(manager, Categories::Id))
                        .col(ColumnDef::new(Categories::CategoryName).string().not_null())
                        .col(ColumnDef::new(Categories::SectionName).string().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Categories {
        Table,
        Id,
        CategoryName,
        SectionName,
    }
}

mod m20240101_000002_create_units_table {

    use super::id_column;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_units_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Units::Table)
                        .if_not_exists()
                        .col(&mut id_column(manager, Units::Id))
                        .col(ColumnDef::new(Units::UnitName).string().not_null())
                        .col(ColumnDef::new(Units::UnitValue).big_integer().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Units::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Units {
        Table,
        Id,
        UnitName,
        UnitValue,
    }
}

mod m20240101_000003_create_goods_table {

    use super::id_column;
    use super::m20240101_000001_create_categories_table::Categories;
    use super::m20240101_000002_create_units_table::Units;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_goods_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Goods::Table)
                        .if_not_exists()
                        .col(&mut id_column(manager, Goods::Id))
                        .col(ColumnDef::new(Goods::Category).big_integer().not_null())
                        .col(ColumnDef::new(Goods::Model).string().not_null())
                        .col(ColumnDef::new(Goods::Unit).big_integer().not_null())
                        .col(
                            ColumnDef::new(Goods::Amount)
                                .big_integer()
                                .not_null()
                                .check(Expr::col(Goods::Amount).gt(0)),
                        )
                        .col(ColumnDef::new(Goods::GoodDesc).string().not_null())
                        .col(
                            ColumnDef::new(Goods::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        // no ON DELETE action: deleting a referenced row is up to the engine
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_goods_category")
                                .from(Goods::Table, Goods::Category)
                                .to(Categories::Table, Categories::Id),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_goods_unit")
                                .from(Goods::Table, Goods::Unit)
                                .to(Units::Table, Units::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_goods_category")
                        .table(Goods::Table)
                        .col(Goods::Category)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Goods::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Goods {
        Table,
        Id,
        Category,
        Model,
        Unit,
        Amount,
        GoodDesc,
        CreatedAt,
    }
}

/// Opens a short-lived connection for migration tooling
pub async fn connect_for_migration(db_url: &str) -> Result<DatabaseConnection> {
    info!("Setting up database connection for migrations");

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(1)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(30))
        .acquire_timeout(Duration::from_secs(30))
        .sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Statement};

    async fn memory_db() -> DatabaseConnection {
        connect_for_migration("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn up_then_down_leaves_no_tables() {
        let db = memory_db().await;
        Migrator::up(&db, None).await.unwrap();

        let manager = SchemaManager::new(&db);
        for table in ["categories", "units", "goods"] {
            assert!(manager.has_table(table).await.unwrap(), "{table} missing");
        }

        Migrator::down(&db, None).await.unwrap();
        for table in ["categories", "units", "goods"] {
            assert!(!manager.has_table(table).await.unwrap(), "{table} left behind");
        }
    }

    #[tokio::test]
    async fn amount_check_is_enforced_by_the_schema() {
        let db = memory_db().await;
        Migrator::up(&db, None).await.unwrap();

        db.execute_unprepared(
            "INSERT INTO categories (category_name, section_name) VALUES ('Tools', 'A1')",
        )
        .await
        .unwrap();
        db.execute_unprepared("INSERT INTO units (unit_name, unit_value) VALUES ('piece', 1)")
            .await
            .unwrap();

        let insert = Statement::from_string(
            db.get_database_backend(),
            "INSERT INTO goods (category, model, unit, amount, good_desc, created_at) \
             VALUES (1, 'X', 1, 0, 'd', '2024-01-01T00:00:00+00:00')",
        );
        assert!(db.execute(insert).await.is_err());
    }
}
