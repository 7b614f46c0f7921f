use crate::error::ReportError;
use crate::model::TRACE_TAG_KEY;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDescriptor {
    pub key: String,
    pub description: String,
}

impl TagDescriptor {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagGroup {
    pub name: String,
    pub tags: Vec<TagDescriptor>,
}

impl TagGroup {
    pub fn new(name: impl Into<String>, tags: Vec<TagDescriptor>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }
}

/// The tag groups shipped with yor, in display order.
pub fn builtin_tag_groups() -> Vec<TagGroup> {
    vec![
        TagGroup::new(
            "simple",
            vec![TagDescriptor::new(
                "yor_name",
                "The name of the resource block in the IaC configuration",
            )],
        ),
        TagGroup::new(
            "code2cloud",
            vec![TagDescriptor::new(
                TRACE_TAG_KEY,
                "A UUID tag that allows easily finding the IaC configuration block of the cloud resource",
            )],
        ),
        TagGroup::new(
            "git",
            vec![
                TagDescriptor::new("git_org", "The entity which owns the repository"),
                TagDescriptor::new("git_repo", "The name of the repository"),
                TagDescriptor::new("git_file", "The file (including path) of the resource block"),
                TagDescriptor::new("git_commit", "The latest commit sha that changed the resource block"),
                TagDescriptor::new("git_modifiers", "The users who modified the resource block"),
                TagDescriptor::new(
                    "git_last_modified_at",
                    "The last time the resource block was modified",
                ),
                TagDescriptor::new(
                    "git_last_modified_by",
                    "The last user who modified the resource block",
                ),
            ],
        ),
        TagGroup::new("external", Vec::new()),
    ]
}

/// Keeps the requested groups, in the order they appear in `groups`.
///
/// An empty selection keeps everything.
pub fn filter_groups(groups: Vec<TagGroup>, names: &[String]) -> Result<Vec<TagGroup>, ReportError> {
    if names.is_empty() {
        return Ok(groups);
    }

    if let Some(unknown) = names.iter().find(|n| !groups.iter().any(|g| &g.name == *n)) {
        return Err(ReportError::UnknownTagGroup(unknown.clone()));
    }

    Ok(groups
        .into_iter()
        .filter(|g| names.contains(&g.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_groups_order() {
        let names: Vec<String> = builtin_tag_groups().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["simple", "code2cloud", "git", "external"]);
    }

    #[test]
    fn test_filter_keeps_catalog_order() {
        let selected = filter_groups(
            builtin_tag_groups(),
            &["git".to_string(), "code2cloud".to_string()],
        )
        .unwrap();
        let names: Vec<&str> = selected.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["code2cloud", "git"]);
    }

    #[test]
    fn test_filter_rejects_unknown_group() {
        let err = filter_groups(builtin_tag_groups(), &["nope".to_string()]).unwrap_err();
        assert!(matches!(err, ReportError::UnknownTagGroup(name) if name == "nope"));
    }
}
