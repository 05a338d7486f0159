//! Paginated archive page generation for static-site build pipelines.
//!
//! Groups of timestamped posts come in (already ordered by the caller),
//! page descriptors come out: one immutable record per listing page,
//! carrying the page's item slice, its output path, and previous/next
//! navigation paths.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── slug       # group key -> URL-safe path segment
//! ├── paginate   # page counts and slice boundaries
//! ├── page/      # PageDescriptor, path rendering, build_page
//! ├── generate   # per-group / per-page orchestration
//! ├── config     # ArchiveConfig (arcgen.toml)
//! ├── error      # ArchiveError
//! └── logger     # log! / debug! macros
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod logger;
pub mod page;
pub mod paginate;
pub mod slug;

pub use config::{ArchiveConfig, ConfigError, EmptyKeys};
pub use error::ArchiveError;
pub use generate::{Descriptors, generate, generate_to_vec};
pub use page::{PageDescriptor, build_page};
