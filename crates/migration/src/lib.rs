pub use sea_orm_migration::prelude::*;

mod m20250712_create_booking_tables;
mod m20250712_add_show_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250712_create_booking_tables::Migration),
            Box::new(m20250712_add_show_indexes::Migration),
        ]
    }
}
