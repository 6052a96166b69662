//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the API layer and the UI layer.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use iced::widget::image::Handle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Server-assigned project identifier (`_id` on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed set of project categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    Prestigious,
    Ongoing,
    Completed,
    Upcoming,
}

impl ProjectType {
    /// All categories in the order they are offered to the operator
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Prestigious,
        ProjectType::Ongoing,
        ProjectType::Completed,
        ProjectType::Upcoming,
    ];

    /// Value sent in the `projectType` form field
    pub fn as_wire(&self) -> &'static str {
        match self {
            ProjectType::Prestigious => "Prestigious",
            ProjectType::Ongoing => "Ongoing",
            ProjectType::Completed => "Completed",
            ProjectType::Upcoming => "Upcoming",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProjectType::Prestigious => "Prestigious Project",
            ProjectType::Ongoing => "Ongoing Project",
            ProjectType::Completed => "Completed",
            ProjectType::Upcoming => "Upcoming",
        })
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|t| t.as_wire() == s)
            .ok_or_else(|| format!("unknown project type {s:?}"))
    }
}

/// Encoded image bytes plus a renderer handle built once from them
#[derive(Clone)]
pub struct ProjectImage {
    bytes: Vec<u8>,
    handle: Handle,
}

impl ProjectImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        let handle = Handle::from_bytes(bytes.clone());
        Self { bytes, handle }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Handle for `iced::widget::image`
    pub fn handle(&self) -> Handle {
        self.handle.clone()
    }
}

impl PartialEq for ProjectImage {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl fmt::Debug for ProjectImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectImage")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A portfolio entry as rendered in the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    /// Derived by the server; may be empty
    pub project_name: String,
    pub description: String,
    pub project_type: ProjectType,
    pub image: ProjectImage,
}

/// A decoded record whose image may be missing
///
/// Update responses are not guaranteed to echo the image, so they are only
/// turned into a `Project` once an image has been settled on.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetails {
    pub id: ProjectId,
    pub project_name: String,
    pub description: String,
    pub project_type: ProjectType,
    pub image: Option<ProjectImage>,
}

impl ProjectDetails {
    pub fn with_image(self, image: ProjectImage) -> Project {
        Project {
            id: self.id,
            project_name: self.project_name,
            description: self.description,
            project_type: self.project_type,
            image,
        }
    }
}

/// Image payload as delivered by the API
///
/// The server serialises a Node `Buffer` as `{ "type": "Buffer", "data": [..] }`.
/// A bare byte array or a pre-encoded base64 string is accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WireImage {
    Buffer { data: Vec<u8> },
    Bytes(Vec<u8>),
    Encoded(String),
}

impl WireImage {
    fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            WireImage::Buffer { data } | WireImage::Bytes(data) => Some(data),
            WireImage::Encoded(encoded) => {
                let payload = encoded
                    .split_once(";base64,")
                    .map(|(_, payload)| payload)
                    .unwrap_or(&encoded);
                BASE64_STANDARD.decode(payload.trim()).ok()
            }
        }
    }
}

/// A project record exactly as the API returns it
#[derive(Debug, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "_id")]
    pub id: ProjectId,
    #[serde(rename = "projectName", default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "projectType")]
    pub project_type: String,
    #[serde(default)]
    pub image: Option<WireImage>,
}

impl ProjectRecord {
    /// Decode the fields, keeping the image optional
    ///
    /// Fails when the type is not one of the known categories.
    pub fn into_details(self) -> Result<ProjectDetails, String> {
        let project_type = self.project_type.parse()?;
        let image = self
            .image
            .and_then(WireImage::into_bytes)
            .filter(|bytes| !bytes.is_empty())
            .map(ProjectImage::new);

        Ok(ProjectDetails {
            id: self.id,
            project_name: self.project_name.unwrap_or_default(),
            description: self.description,
            project_type,
            image,
        })
    }

    /// Convert into a renderable project
    ///
    /// Fails on an unknown type or when there is no image data.
    pub fn into_project(self) -> Result<Project, String> {
        let mut details = self.into_details()?;
        match details.image.take() {
            Some(image) => Ok(details.with_image(image)),
            None => Err("no image data".to_string()),
        }
    }
}

/// Convert a fetched list, dropping records that cannot be rendered
pub fn decode_project_list(records: Vec<ProjectRecord>) -> Vec<Project> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id.clone();
            match record.into_project() {
                Ok(project) => Some(project),
                Err(e) => {
                    warn!("Skipping project {}: {}", id, e);
                    None
                }
            }
        })
        .collect()
}

/// Opaque credential returned by a successful login
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Body of `POST /api/admin/login`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// A locally selected image file ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime: &'static str,
    pub image: ProjectImage,
}

/// Payload of `POST /api/admin/add`
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub image: ImageFile,
    pub description: String,
    pub project_type: ProjectType,
}

/// Payload of `PUT /api/admin/update/:id`
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectUpdate {
    pub description: String,
    pub project_type: ProjectType,
    /// Only present when the operator picked a replacement
    pub image: Option<ImageFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_node_buffer_record() {
        let json = r#"{
            "_id": "64f1",
            "projectName": "Bridge",
            "description": "Steel bridge",
            "projectType": "Ongoing",
            "image": { "type": "Buffer", "data": [255, 216, 255, 224] }
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        let project = record.into_project().unwrap();

        assert_eq!(project.id, ProjectId("64f1".to_string()));
        assert_eq!(project.project_name, "Bridge");
        assert_eq!(project.project_type, ProjectType::Ongoing);
        assert_eq!(project.image.bytes(), &[255, 216, 255, 224]);
    }

    #[test]
    fn test_decodes_base64_image() {
        let json = r#"{
            "_id": "a",
            "description": "",
            "projectType": "Completed",
            "image": "data:image/jpeg;base64,AQID"
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        let project = record.into_project().unwrap();

        assert_eq!(project.project_name, "");
        assert_eq!(project.image.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_details_tolerate_missing_image() {
        let json = r#"{ "_id": "a", "description": "d", "projectType": "Ongoing" }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        let details = record.into_details().unwrap();
        assert!(details.image.is_none());

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert!(record.into_project().is_err());
    }

    #[test]
    fn test_list_drops_unrenderable_records() {
        let json = r#"[
            { "_id": "ok", "description": "d", "projectType": "Upcoming", "image": [1] },
            { "_id": "no-image", "description": "d", "projectType": "Upcoming", "image": { "type": "Buffer", "data": [] } },
            { "_id": "bad-type", "description": "d", "projectType": "Residential", "image": [1] }
        ]"#;

        let records: Vec<ProjectRecord> = serde_json::from_str(json).unwrap();
        let projects = decode_project_list(records);

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id.0, "ok");
    }

    #[test]
    fn test_project_type_labels_and_wire_values() {
        assert_eq!(ProjectType::Prestigious.to_string(), "Prestigious Project");
        assert_eq!(ProjectType::Upcoming.to_string(), "Upcoming");
        for project_type in ProjectType::ALL {
            assert_eq!(project_type.as_wire().parse::<ProjectType>(), Ok(project_type));
        }
    }

    #[test]
    fn test_token_debug_hides_value() {
        let token = SessionToken::new("secret");
        assert!(!format!("{:?}", token).contains("secret"));
    }
}
