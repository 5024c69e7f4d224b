//! Migration: Create the clinic tables.
//!
//! Owners, vets, and specialties, plus the join table linking vets to
//! the specialties they practice.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owners::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Owners::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Owners::FirstName).string().not_null())
                    .col(ColumnDef::new(Owners::LastName).string().not_null())
                    .col(ColumnDef::new(Owners::Address).string().not_null())
                    .col(ColumnDef::new(Owners::City).string().not_null())
                    .col(ColumnDef::new(Owners::Telephone).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Last-name lookups back the find-by-field queries
        manager
            .create_index(
                Index::create()
                    .name("idx_owners_last_name")
                    .table(Owners::Table)
                    .col(Owners::LastName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Vets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vets::FirstName).string().not_null())
                    .col(ColumnDef::new(Vets::LastName).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Specialties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Specialties::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Specialties::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VetSpecialties::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(VetSpecialties::VetId).integer().not_null())
                    .col(
                        ColumnDef::new(VetSpecialties::SpecialtyId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(VetSpecialties::VetId)
                            .col(VetSpecialties::SpecialtyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vet_specialties_vet")
                            .from(VetSpecialties::Table, VetSpecialties::VetId)
                            .to(Vets::Table, Vets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vet_specialties_specialty")
                            .from(VetSpecialties::Table, VetSpecialties::SpecialtyId)
                            .to(Specialties::Table, Specialties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop the join table before the tables it references
        manager
            .drop_table(Table::drop().table(VetSpecialties::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Specialties::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Vets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Owners::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Owners {
    Table,
    Id,
    FirstName,
    LastName,
    Address,
    City,
    Telephone,
}

#[derive(Iden)]
enum Vets {
    Table,
    Id,
    FirstName,
    LastName,
}

#[derive(Iden)]
enum Specialties {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum VetSpecialties {
    Table,
    VetId,
    SpecialtyId,
}
