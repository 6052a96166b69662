//! Gallery working copy and the edit/delete interactions layered on it
//!
//! Every mount of the gallery reloads the list from the server. Between
//! mounts, each mutation goes through the merge rules in `reconcile`.

use std::time::Duration;
use tracing::{error, info, warn};

use super::data::{ImageFile, Project, ProjectDetails, ProjectId, ProjectType, ProjectUpdate};
use super::reconcile;
use super::typing::TypingEffect;
use super::view_state::{Notice, Status};
use crate::error::ApiError;

pub const FETCH_FAILED: &str = "Error fetching the project details";
pub const DELETE_FAILED: &str = "Failed to delete the project.";
pub const UPDATE_FAILED: &str = "Failed to update the project.";

/// Transient draft behind the edit modal
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub id: ProjectId,
    pub description: String,
    pub project_type: ProjectType,
    /// Replacement picked by the operator, if any
    pub image: Option<ImageFile>,
    /// Why the last picked file was refused
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    projects: Vec<Project>,
    /// Status of the list fetch
    pub status: Status,
    /// Banner for failed delete/update requests
    action_error: Option<String>,
    pending_delete: Option<ProjectId>,
    editing: Option<EditDraft>,
    placeholder: TypingEffect,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Start the list fetch issued on mount
    ///
    /// Dialogs and banners from the previous visit are dropped. The old list
    /// stays visible until the response replaces it.
    pub fn begin_load(&mut self) {
        self.status = Status::Loading;
        self.action_error = None;
        self.pending_delete = None;
        self.editing = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Project>, ApiError>) {
        match result {
            Ok(projects) => {
                info!("📂 Loaded {} projects", projects.len());
                self.projects = projects;
                self.status = Status::Success;
            }
            Err(e) => {
                error!("Error fetching projects: {}", e);
                self.projects.clear();
                self.status = Status::Error(FETCH_FAILED.to_string());
            }
        }
    }

    /// The banner text, if any. A failed fetch takes precedence.
    pub fn error_message(&self) -> Option<&str> {
        self.status.error().or(self.action_error.as_deref())
    }

    /// The typing placeholder replaces the grid while the list is empty,
    /// unless the fetch itself failed.
    pub fn shows_placeholder(&self) -> bool {
        self.projects.is_empty() && self.status.error().is_none()
    }

    pub fn placeholder_text(&self) -> String {
        self.placeholder.visible()
    }

    pub fn tick(&mut self, elapsed: Duration) {
        if self.shows_placeholder() {
            self.placeholder.advance(elapsed);
        }
    }

    /// Fold a project created from the create view into the working copy
    pub fn project_created(&mut self, project: Project) {
        reconcile::append(&mut self.projects, project);
    }

    // ========== Delete ==========

    pub fn request_delete(&mut self, id: ProjectId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<&ProjectId> {
        self.pending_delete.as_ref()
    }

    /// Take the target for exactly one delete request
    pub fn confirm_delete(&mut self) -> Option<ProjectId> {
        self.pending_delete.take()
    }

    pub fn finish_delete(&mut self, id: &ProjectId, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                if !reconcile::remove(&mut self.projects, id) {
                    warn!("Deleted project {} was not in the local list", id);
                }
                self.action_error = None;
            }
            Err(e) => {
                error!("Error deleting project {}: {}", id, e);
                self.action_error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    // ========== Edit ==========

    /// Open the edit modal pre-filled from the current entry
    pub fn begin_edit(&mut self, id: &ProjectId) {
        let Some(project) = self.projects.iter().find(|p| &p.id == id) else {
            warn!("Cannot edit unknown project {}", id);
            return;
        };

        self.editing = Some(EditDraft {
            id: project.id.clone(),
            description: project.description.clone(),
            project_type: project.project_type,
            image: None,
            notice: None,
        });
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    pub fn edit_description(&mut self, description: String) {
        if let Some(draft) = &mut self.editing {
            draft.description = description;
        }
    }

    pub fn edit_type(&mut self, project_type: ProjectType) {
        if let Some(draft) = &mut self.editing {
            draft.project_type = project_type;
        }
    }

    pub fn edit_image(&mut self, image: ImageFile) {
        if let Some(draft) = &mut self.editing {
            draft.image = Some(image);
            draft.notice = None;
        }
    }

    /// Show why a picked replacement was refused; the previous pick stays
    pub fn reject_edit_image(&mut self, reason: &ApiError) {
        if let Some(draft) = &mut self.editing {
            warn!("Refused replacement image for {}: {}", draft.id, reason);
            draft.notice = Some(Notice::warning(format!("⚠️ {reason}")));
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Close the modal and produce the update request
    ///
    /// The edit session ends here whatever the request's outcome. The image
    /// is only included when a replacement was picked.
    pub fn save_edit(&mut self) -> Option<(ProjectId, ProjectUpdate)> {
        let draft = self.editing.take()?;
        Some((
            draft.id,
            ProjectUpdate {
                description: draft.description,
                project_type: draft.project_type,
                image: draft.image,
            },
        ))
    }

    /// Apply the update response
    ///
    /// The entry is replaced by the server record. When an image was
    /// replaced the locally selected bytes are shown, since the response
    /// does not carry the new ones. Without either, the current image stays.
    pub fn finish_edit(
        &mut self,
        id: &ProjectId,
        replaced: Option<ImageFile>,
        result: Result<ProjectDetails, ApiError>,
    ) {
        match result {
            Ok(mut updated) => {
                let previous = self
                    .projects
                    .iter()
                    .find(|p| &p.id == id)
                    .map(|p| p.image.clone());
                let image = replaced.map(|file| file.image).or(updated.image.take()).or(previous);
                updated.id = id.clone();

                let applied = image
                    .map(|image| reconcile::replace(&mut self.projects, updated.with_image(image)))
                    .unwrap_or(false);
                if !applied {
                    warn!("Updated project {} was not in the local list", id);
                }
                self.action_error = None;
            }
            Err(e) => {
                error!("Error updating project {}: {}", id, e);
                self.action_error = Some(UPDATE_FAILED.to_string());
            }
        }
    }
}
