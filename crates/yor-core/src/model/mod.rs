use serde::{Deserialize, Serialize};

/// Tag key carrying the trace identifier of a block.
pub const TRACE_TAG_KEY: &str = "yor_trace";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A tag present before and after a pass whose value changed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedTag {
    pub key: String,
    pub prev_value: String,
    pub new_value: String,
}

impl UpdatedTag {
    pub fn new(
        key: impl Into<String>,
        prev_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            prev_value: prev_value.into(),
            new_value: new_value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    pub added: Vec<Tag>,
    pub updated: Vec<UpdatedTag>,
}

impl TagDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty()
    }
}

/// Read-only view of one taggable resource as seen by the report builder.
pub trait TaggedBlock {
    fn file_path(&self) -> &str;
    fn resource_id(&self) -> &str;
    fn trace_id(&self) -> &str;

    /// Tags computed for the block on this pass, in enumeration order.
    fn new_tags(&self) -> Vec<Tag>;

    fn tags_diff(&self) -> TagDiff;
}

/// A block as recorded by the scanning process: the tags it carried before
/// the pass and the tags computed during it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSnapshot {
    pub file_path: String,
    pub resource_id: String,
    #[serde(default)]
    pub previous_tags: Vec<Tag>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl BlockSnapshot {
    pub fn new(file_path: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            resource_id: resource_id.into(),
            previous_tags: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_previous_tags(mut self, tags: Vec<Tag>) -> Self {
        self.previous_tags = tags;
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// True when the block already carried a trace tag before this pass.
    pub fn is_traced(&self) -> bool {
        self.previous_tags.iter().any(|t| t.key == TRACE_TAG_KEY)
    }

    fn previous_value(&self, key: &str) -> Option<&str> {
        self.previous_tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }
}

impl TaggedBlock for BlockSnapshot {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn resource_id(&self) -> &str {
        &self.resource_id
    }

    fn trace_id(&self) -> &str {
        self.tags
            .iter()
            .chain(self.previous_tags.iter())
            .find(|t| t.key == TRACE_TAG_KEY)
            .map(|t| t.value.as_str())
            .unwrap_or_default()
    }

    fn new_tags(&self) -> Vec<Tag> {
        self.tags.clone()
    }

    fn tags_diff(&self) -> TagDiff {
        let mut diff = TagDiff::default();
        for tag in &self.tags {
            match self.previous_value(&tag.key) {
                None => diff.added.push(tag.clone()),
                Some(prev) if prev != tag.value => {
                    diff.updated.push(UpdatedTag::new(&tag.key, prev, &tag.value));
                }
                Some(_) => {}
            }
        }
        diff
    }
}
