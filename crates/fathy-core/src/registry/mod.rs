//! Module registry: path derivation, endpoint table and module scanner.

mod path;
mod scanner;
mod table;

pub use path::{endpoint_path, API_PREFIX};
pub use scanner::{ModuleFilter, ModuleScanner, ScanReport, SkippedModule};
pub use table::{Binding, EndpointTable, EndpointTableBuilder};
