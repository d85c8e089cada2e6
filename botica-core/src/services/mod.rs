//! Service layer - pipeline orchestration and views
//!
//! Services coordinate domain logic and port interactions. The pure stages
//! (normalize, detect, build, reconcile, view, report) are plain functions;
//! the stateful services wrap them around a repository.

pub mod build;
mod demo;
pub mod detect;
mod ingest;
pub mod logging;
pub mod normalize;
pub mod reconcile;
pub mod report;
mod status;
mod store;
pub mod view;

pub use demo::DemoService;
pub use ingest::{IngestOutcome, IngestService};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use reconcile::{merge_records, MergeOutcome};
pub use report::{DailySales, PrefixSales, SalesTotals, SellerSummary};
pub use status::{DatasetStatus, StatusService};
pub use store::StoreService;
