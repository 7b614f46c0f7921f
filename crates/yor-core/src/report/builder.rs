use crate::accumulator::ChangeAccumulator;
use crate::model::TaggedBlock;
use crate::report::{Report, ReportSummary, TagRecord};
use std::collections::HashSet;
use tracing::debug;

/// Builds a fresh report from a finished pass.
///
/// New-resource records keep the block's own tag order. For updated blocks
/// the added tags come first, then the changed ones, each group sorted by key.
///
/// The summary counts distinct resource ids among blocks that produced at
/// least one record, so one resource declared in two files counts once.
pub fn build_report<B: TaggedBlock>(changes: &ChangeAccumulator<B>) -> Report {
    let mut new_resource_tags = Vec::new();
    let mut new_resources = HashSet::new();
    for block in changes.new_block_traces() {
        let before = new_resource_tags.len();
        for tag in block.new_tags() {
            new_resource_tags.push(record(block, tag.key, String::new(), tag.value));
        }
        if new_resource_tags.len() > before {
            new_resources.insert(block.resource_id());
        }
    }

    let mut updated_resource_tags = Vec::new();
    let mut updated_resources = HashSet::new();
    for block in changes.updated_block_traces() {
        let before = updated_resource_tags.len();
        let mut diff = block.tags_diff();

        diff.added.sort_by(|a, b| a.key.cmp(&b.key));
        for tag in diff.added {
            updated_resource_tags.push(record(block, tag.key, String::new(), tag.value));
        }

        diff.updated.sort_by(|a, b| a.key.cmp(&b.key));
        for tag in diff.updated {
            updated_resource_tags.push(record(block, tag.key, tag.prev_value, tag.new_value));
        }

        if updated_resource_tags.len() > before {
            updated_resources.insert(block.resource_id());
        }
    }

    debug!(
        scanned = changes.scanned_blocks().len(),
        new_records = new_resource_tags.len(),
        updated_records = updated_resource_tags.len(),
        "built tag change report"
    );

    Report {
        summary: ReportSummary {
            scanned: changes.scanned_blocks().len(),
            new_resources: new_resources.len(),
            updated_resources: updated_resources.len(),
        },
        new_resource_tags,
        updated_resource_tags,
    }
}

fn record<B: TaggedBlock>(
    block: &B,
    key: String,
    old_value: String,
    updated_value: String,
) -> TagRecord {
    TagRecord {
        file: block.file_path().to_string(),
        resource_id: block.resource_id().to_string(),
        key,
        old_value,
        updated_value,
        yor_trace_id: block.trace_id().to_string(),
    }
}
