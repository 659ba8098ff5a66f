//! Backend implementation for the Lawyer Point booking service.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations,
//! and reqwest for calls to the external payment gateway.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication and role guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token service, gateway client)
//! - **Startup** (`startup`) - Database connection and HTTP client initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Gateway** (`gateway`) - Payment gateway HTTP client
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Controller** runs the `AuthGuard` where required, converts DTOs to params
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model back to a DTO response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod gateway;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
