//! # Generator Module
//!
//! Turns a [`crate::config::ModelConfig`] into a go-kit service layer on
//! disk: model, repository, service + DTOs, endpoints, HTTP/gRPC transports,
//! proto definition, route registration, and test skeletons.
//!
//! ## Architecture
//!
//! ```text
//! ModelConfig → TemplateSet (minijinja + function table) → Pipeline → files
//! ```
//!
//! - [`TemplateSet`] holds the embedded templates, parsed once at startup
//!   with the helper function table registered.
//! - [`generate`] runs the ordered step sequence, gating the proto and
//!   transport steps on the transport flags and the service/endpoint test
//!   steps on the tests flag. Transport test files are gated only by their
//!   transport flag.
//! - `routes.go` is written once and afterwards left alone; every other
//!   artifact is overwritten on regeneration.
//!
//! ## Generated structure
//!
//! ```text
//! <output>/
//! ├── api/proto/v1/<m>.proto
//! └── internal/
//!     ├── models/<m>.go
//!     ├── repositories/<m>_repository.go
//!     ├── service/<m>_service.go
//!     ├── service/dto/<m>_dto.go
//!     └── api/
//!         ├── endpoints/<m>_endpoint.go
//!         └── transports/{http,grpc}/...
//! ```

mod funcs;
mod pipeline;
mod renderer;

pub use funcs::*;
pub use pipeline::*;
pub use renderer::*;
