pub mod accumulator;
pub mod catalog;
pub mod error;
pub mod model;
pub mod report;

pub use accumulator::{ChangeAccumulator, ChangeSnapshot};
pub use catalog::{builtin_tag_groups, filter_groups, TagDescriptor, TagGroup};
pub use error::ReportError;
pub use model::{BlockSnapshot, Tag, TagDiff, TaggedBlock, UpdatedTag, TRACE_TAG_KEY};
pub use report::builder::build_report;
pub use report::service::ReportService;
pub use report::{write_json_file, Report, ReportSummary, TagRecord};
