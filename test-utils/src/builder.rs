use entity::prelude::*;
use sea_orm::{
    sea_query::{Alias, Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Lawyer};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Lawyer)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Vector of CREATE INDEX statements to execute after table setup.
    ///
    /// Composite indexes cannot be expressed on entity models, so they are
    /// carried separately and executed once all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a CREATE INDEX statement to the test database schema.
    ///
    /// Indexes are created after all tables during `build()`, so an index may
    /// be added before the table it targets.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement to execute during setup
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds all tables required for booking operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - AppointmentOption
    /// - AppointmentSlot
    /// - Reservation
    /// - Lawyer
    /// - Payment
    ///
    /// It also creates the unique reservation booking index, so duplicate
    /// bookings conflict in tests exactly as they do under the migrations.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_booking_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_booking_tables(self) -> Self {
        self.with_table(User)
            .with_table(AppointmentOption)
            .with_table(AppointmentSlot)
            .with_table(Reservation)
            .with_table(Lawyer)
            .with_table(Payment)
            .with_index(reservation_booking_index())
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, followed by any CREATE INDEX
    /// statements. Tables are created in the order they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

/// Unique index enforcing one reservation per client per category per day.
///
/// Mirrors the index the migrations create, which the reservation insert path
/// relies on for ON CONFLICT DO NOTHING.
fn reservation_booking_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_reservation_booking_key")
        .table(Alias::new("reservation"))
        .col(Alias::new("lawsuit"))
        .col(Alias::new("email"))
        .col(Alias::new("appointment_date"))
        .unique()
        .to_owned()
}
