//! Migration: Seed the clinic reference data.
//!
//! Loads the classic sample dataset so a fresh database serves useful
//! responses immediately. Sequences are resynced after the explicit-id
//! inserts so later creates keep working.

use sea_orm::ConnectionTrait;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_OWNERS: &str = r"
INSERT INTO owners (id, first_name, last_name, address, city, telephone) VALUES
    (1, 'George', 'Franklin', '110 W. Liberty St.', 'Madison', '6085551023'),
    (2, 'Betty', 'Davis', '638 Cardinal Ave.', 'Sun Prairie', '6085551749'),
    (3, 'Eduardo', 'Rodriquez', '2693 Commerce St.', 'McFarland', '6085558763'),
    (4, 'Harold', 'Davis', '563 Friendly St.', 'Windsor', '6085553198'),
    (5, 'Peter', 'McTavish', '2387 S. Fair Way', 'Madison', '6085552765'),
    (6, 'Jean', 'Coleman', '105 N. Lake St.', 'Monona', '6085552654'),
    (7, 'Jeff', 'Black', '1450 Oak Blvd.', 'Monona', '6085555387'),
    (8, 'Maria', 'Escobito', '345 Maple St.', 'Madison', '6085557683'),
    (9, 'David', 'Schroeder', '2749 Blackhawk Trail', 'Madison', '6085559435'),
    (10, 'Carlos', 'Estaban', '2335 Independence La.', 'Waunakee', '6085555487');
";

const SEED_VETS: &str = r"
INSERT INTO vets (id, first_name, last_name) VALUES
    (1, 'James', 'Carter'),
    (2, 'Helen', 'Leary'),
    (3, 'Linda', 'Douglas'),
    (4, 'Rafael', 'Ortega'),
    (5, 'Henry', 'Stevens'),
    (6, 'Sharon', 'Jenkins');
";

const SEED_SPECIALTIES: &str = r"
INSERT INTO specialties (id, name) VALUES
    (1, 'radiology'),
    (2, 'surgery'),
    (3, 'dentistry');
";

const SEED_VET_SPECIALTIES: &str = r"
INSERT INTO vet_specialties (vet_id, specialty_id) VALUES
    (2, 1),
    (3, 2),
    (3, 3),
    (4, 2),
    (5, 1);
";

const RESYNC_SEQUENCES: &str = r"
SELECT setval(pg_get_serial_sequence('owners', 'id'), (SELECT MAX(id) FROM owners));
SELECT setval(pg_get_serial_sequence('vets', 'id'), (SELECT MAX(id) FROM vets));
SELECT setval(pg_get_serial_sequence('specialties', 'id'), (SELECT MAX(id) FROM specialties));
";

const UNSEED: &str = r"
DELETE FROM vet_specialties WHERE (vet_id, specialty_id) IN ((2, 1), (3, 2), (3, 3), (4, 2), (5, 1));
DELETE FROM specialties WHERE id BETWEEN 1 AND 3;
DELETE FROM vets WHERE id BETWEEN 1 AND 6;
DELETE FROM owners WHERE id BETWEEN 1 AND 10;
";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let connection = manager.get_connection();

        connection.execute_unprepared(SEED_OWNERS).await?;
        connection.execute_unprepared(SEED_VETS).await?;
        connection.execute_unprepared(SEED_SPECIALTIES).await?;
        connection.execute_unprepared(SEED_VET_SPECIALTIES).await?;
        connection.execute_unprepared(RESYNC_SEQUENCES).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.get_connection().execute_unprepared(UNSEED).await?;
        Ok(())
    }
}
