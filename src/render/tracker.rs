use serde::Serialize;

use super::stories::UserStory;

/// A reference to a tracker project by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRef {
    /// The tracker's project key.
    pub key: String,
}

/// A reference to a named tracker entity (issue type, priority).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRef {
    /// The entity's display name.
    pub name: String,
}

/// The issue-creation payload for one user story.
///
/// The shape mirrors the tracker's issue-creation API: summary is the story
/// text, description the acceptance criteria, and the priority name encodes
/// the MoSCoW weight as "Priority {weight}". The push itself is an external
/// collaborator; this module only produces the payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuePayload {
    /// The project the issue is filed under.
    pub project: ProjectRef,
    /// Issue summary.
    pub summary: String,
    /// Issue description.
    pub description: String,
    /// Issue type; always "Story".
    pub issuetype: NameRef,
    /// Issue priority.
    pub priority: NameRef,
}

/// Maps story rows to issue payloads for the given project key.
#[must_use]
pub fn issues(project_key: &str, stories: &[UserStory]) -> Vec<IssuePayload> {
    stories
        .iter()
        .map(|story| IssuePayload {
            project: ProjectRef {
                key: project_key.to_string(),
            },
            summary: story.story.clone(),
            description: story.acceptance_criteria.clone(),
            issuetype: NameRef {
                name: "Story".to_string(),
            },
            priority: NameRef {
                name: format!("Priority {}", story.priority),
            },
        })
        .collect()
}
