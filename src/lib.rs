//! # kitgen
//!
//! **kitgen** is an interactive scaffolding CLI for go-kit services. It walks
//! the user through a terminal wizard describing one domain model (fields,
//! enums, relations, validations, transports) and emits the full service
//! layer for it by rendering embedded templates against the collected
//! configuration.
//!
//! ## Architecture
//!
//! The crate is organized into a handful of modules:
//!
//! - **[`config`]** - The [`ModelConfig`] data model: what to generate, built
//!   once by the wizard or loaded from a YAML/JSON description file, and
//!   read-only from then on
//! - **[`wizard`]** - Sequential terminal form that produces a `ModelConfig`
//! - **[`generator`]** - Template renderer (minijinja environment with a
//!   registered helper function table) and the ordered generation pipeline
//! - **[`cli`]** - clap-based command-line surface
//!
//! ## Generation flow
//!
//! ```text
//! wizard / description file
//!         │
//!         ▼
//!    ModelConfig ──► pipeline ──► TemplateSet.render(name, config) ──► files
//! ```
//!
//! The pipeline runs a fixed step order: model, proto (when a transport is
//! requested), repository, service + DTO, endpoint, HTTP transport (+ its
//! test), gRPC transport (+ its test), route registration, and finally the
//! service and endpoint tests when requested. `routes.go` is generated only
//! when absent; regeneration of an existing project leaves it untouched and
//! prints a notice instead.
//!
//! ## Generated structure
//!
//! For a model named `Order` the HTTP-only, tests-on run produces:
//!
//! ```text
//! <output>/
//! ├── api/proto/v1/order.proto
//! └── internal/
//!     ├── models/order.go
//!     ├── repositories/order_repository.go
//!     ├── service/
//!     │   ├── order_service.go
//!     │   ├── order_service_test.go
//!     │   └── dto/order_dto.go
//!     └── api/
//!         ├── endpoints/order_endpoint.go
//!         ├── endpoints/order_endpoint_test.go
//!         └── transports/http/
//!             ├── order_http.go
//!             ├── order_http_test.go
//!             └── routes.go
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive wizard
//! kitgen model
//!
//! # Non-interactive, from a model description file
//! kitgen model --config order.yaml --output ./my-service
//! ```
//!
//! ## Failure model
//!
//! Generation is single-threaded and fail-fast: the first directory,
//! rendering, or write error aborts the run. Files written before the
//! failure stay on disk; there is no rollback.

pub mod cli;
pub mod config;
pub mod generator;
pub mod wizard;

pub use config::{Enum, Field, ModelConfig};
pub use generator::{generate, TemplateSet};
