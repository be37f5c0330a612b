//! shake-core - ports and adapters core for shake-sass.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         shake-cli (shake-sass)          │
//! │   builds adapters, calls Scaffolder     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application: Scaffolder           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Ports: TemplateSource, Filesystem     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            shake-adapters               │
//! │ DirectorySource, EmbeddedSource,        │
//! │ LocalFilesystem, MemoryFilesystem       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shake_core::prelude::*;
//! use shake_adapters::{DirectorySource, LocalFilesystem};
//!
//! let source = DirectorySource::new("templates");
//! let report = Scaffolder::new(Box::new(LocalFilesystem::new()))
//!     .with_policy(ConflictPolicy::Skip)
//!     .run(&source, Path::new("./my-site"))?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Scaffolder,
        ports::{Filesystem, TemplateEntries, TemplateSource},
    };
    pub use crate::domain::{
        ConflictPolicy, RelativePath, ScaffoldReport, TemplateEntry, TemplateFile,
    };
    pub use crate::error::{ShakeError, ShakeResult};
}
