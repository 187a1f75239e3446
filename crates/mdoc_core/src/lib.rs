//! # mdoc_core
//!
//! Cross-checks the metric names declared in a source file against a
//! directory of per-metric YAML documentation, and combines all parseable
//! documentation into one aggregate file.
//!
//! ## Stages
//!
//! - **Extraction**: read the quoted names between the marker line and the
//!   sentinel line of the declaration source file
//! - **Listing**: collect the sorted entry names of the documentation directory
//! - **Validation**: check that each declared metric has a documentation file
//!   that opens, parses, and defines the required keys
//! - **Aggregation**: write every parsed document, in declaration order, to
//!   the aggregate output file
//!
//! ## Example
//!
//! ```rust,no_run
//! use mdoc_core::{DocConfig, DocPipeline};
//!
//! let outcome = DocPipeline::new(DocConfig::default())
//!     .run_with(|failure| println!("{}", failure))
//!     .unwrap();
//!
//! std::process::exit(outcome.exit_code() as i32);
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod lister;
pub mod models;
pub mod pipeline;
pub mod validator;
pub mod writer;
pub mod yaml;

pub use config::DocConfig;
pub use error::{DocError, DocResult};
pub use extractor::NameExtractor;
pub use lister::DocLister;
pub use models::{AggregateDocument, DeclaredMetric};
pub use pipeline::{unreferenced_files, DocPipeline, RunOutcome};
pub use validator::{DocFailure, DocValidator, ValidationReport};
pub use writer::AggregateWriter;
pub use yaml::parse_document;
