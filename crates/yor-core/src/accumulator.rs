use crate::model::{BlockSnapshot, TaggedBlock};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The blocks seen during one pass, split by what happened to their tags.
///
/// The report builder only reads from this; it is handed over as a finished
/// snapshot once scanning is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeAccumulator<B = BlockSnapshot> {
    scanned_blocks: Vec<B>,
    new_block_traces: Vec<B>,
    updated_block_traces: Vec<B>,
}

impl<B> Default for ChangeAccumulator<B> {
    fn default() -> Self {
        Self {
            scanned_blocks: Vec::new(),
            new_block_traces: Vec::new(),
            updated_block_traces: Vec::new(),
        }
    }
}

impl<B> ChangeAccumulator<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an accumulator from collections classified elsewhere.
    pub fn from_parts(
        scanned_blocks: Vec<B>,
        new_block_traces: Vec<B>,
        updated_block_traces: Vec<B>,
    ) -> Self {
        Self {
            scanned_blocks,
            new_block_traces,
            updated_block_traces,
        }
    }

    pub fn scanned_blocks(&self) -> &[B] {
        &self.scanned_blocks
    }

    pub fn new_block_traces(&self) -> &[B] {
        &self.new_block_traces
    }

    pub fn updated_block_traces(&self) -> &[B] {
        &self.updated_block_traces
    }
}

impl ChangeAccumulator<BlockSnapshot> {
    /// Records a scanned block and files it as new or updated when its tags changed.
    pub fn accumulate(&mut self, block: BlockSnapshot) {
        if !block.is_traced() {
            if !block.tags.is_empty() {
                debug!(resource = %block.resource_id, "new block trace");
                self.new_block_traces.push(block.clone());
            }
        } else if !block.tags_diff().is_empty() {
            debug!(resource = %block.resource_id, trace = %block.trace_id(), "updated block trace");
            self.updated_block_traces.push(block.clone());
        }
        self.scanned_blocks.push(block);
    }
}

/// On-disk form of a pass: the scanned blocks in the order they were visited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChangeSnapshot {
    #[serde(default)]
    pub blocks: Vec<BlockSnapshot>,
}

impl ChangeSnapshot {
    pub fn into_accumulator(self) -> ChangeAccumulator<BlockSnapshot> {
        let mut acc = ChangeAccumulator::<BlockSnapshot>::new();
        for block in self.blocks {
            acc.accumulate(block);
        }
        acc
    }
}
