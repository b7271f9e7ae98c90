//! Logging facade for authlog
//!
//! Provides a leveled log store with a bounded in-memory history, forwarding
//! to a platform sink, and diagnostic export of the history.

mod export;
mod history;
mod level;
mod sink;
mod store;

pub use export::{create_export_path, export_to_dir, write_history, ExportFormat};
pub use history::{HistoryBuffer, MAX_SIZE};
pub use level::{ParseSeverityError, Severity};
pub use sink::{forward, PlatformSink, TracingSink, APP_TAG};
pub use store::LogStore;
