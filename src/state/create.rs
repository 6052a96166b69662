use tracing::error;

use super::data::{ImageFile, NewProject, ProjectType};
use super::drop_zone::DropZone;
use super::view_state::{Notice, Status};
use crate::error::ApiError;

pub const MISSING_FIELDS: &str = "⚠️ Please fill all fields including project type.";
pub const CREATED: &str = "✅ Project created successfully!";
pub const CREATE_FAILED: &str = "❌ Failed to create project";

/// Draft of a new project
#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    pub image: Option<ImageFile>,
    pub description: String,
    pub project_type: Option<ProjectType>,
    pub status: Status,
    pub notice: Option<Notice>,
    pub drop_zone: DropZone,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_image(&mut self, image: ImageFile) {
        self.image = Some(image);
    }

    /// Show why a selected file was refused
    pub fn reject_file(&mut self, reason: &ApiError) {
        self.notice = Some(Notice::warning(format!("⚠️ {reason}")));
    }

    /// Validate and produce the create payload
    ///
    /// All three fields are mandatory. A missing one shows a warning and no
    /// request is made.
    pub fn submit(&mut self) -> Option<NewProject> {
        if self.status.is_loading() {
            return None;
        }

        let (Some(image), Some(project_type)) = (&self.image, self.project_type) else {
            self.notice = Some(Notice::warning(MISSING_FIELDS));
            return None;
        };
        if self.description.is_empty() {
            self.notice = Some(Notice::warning(MISSING_FIELDS));
            return None;
        }

        self.status = Status::Loading;
        Some(NewProject {
            image: image.clone(),
            description: self.description.clone(),
            project_type,
        })
    }

    /// Apply the create response
    ///
    /// Success resets every field. Failure keeps them, image included, so the
    /// operator can submit again.
    pub fn finish(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.image = None;
                self.description.clear();
                self.project_type = None;
                self.status = Status::Success;
                self.notice = Some(Notice::success(CREATED));
            }
            Err(e) => {
                error!("Failed to create project: {}", e);
                self.status = Status::Error(CREATE_FAILED.to_string());
                self.notice = Some(Notice::error(CREATE_FAILED));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ProjectImage;
    use crate::state::view_state::NoticeKind;

    fn image() -> ImageFile {
        ImageFile {
            file_name: "site.png".to_string(),
            mime: "image/png",
            image: ProjectImage::new(vec![0x89, b'P', b'N', b'G']),
        }
    }

    fn filled() -> CreateForm {
        let mut form = CreateForm::new();
        form.select_image(image());
        form.description = "New tower".to_string();
        form.project_type = Some(ProjectType::Upcoming);
        form
    }

    #[test]
    fn test_missing_fields_make_no_request() {
        let cases: [fn(&mut CreateForm); 3] = [
            |f| f.image = None,
            |f| f.description.clear(),
            |f| f.project_type = None,
        ];

        for clear in cases {
            let mut form = filled();
            clear(&mut form);

            assert!(form.submit().is_none());
            assert_eq!(form.notice, Some(Notice::warning(MISSING_FIELDS)));
            assert_eq!(form.status, Status::Idle);
        }
    }

    #[test]
    fn test_complete_form_produces_one_payload() {
        let mut form = filled();

        let payload = form.submit().unwrap();
        assert_eq!(payload.description, "New tower");
        assert_eq!(payload.project_type, ProjectType::Upcoming);
        assert_eq!(payload.image.file_name, "site.png");

        // In flight: a second click does nothing
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_whitespace_description_is_accepted() {
        let mut form = filled();
        form.description = "   ".to_string();

        let payload = form.submit().unwrap();
        assert_eq!(payload.description, "   ");
        assert!(form.notice.is_none());
    }

    #[test]
    fn test_success_resets_fields() {
        let mut form = filled();
        form.submit().unwrap();
        form.finish(Ok(()));

        assert!(form.image.is_none());
        assert!(form.description.is_empty());
        assert!(form.project_type.is_none());
        assert_eq!(form.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Success));
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        form.submit().unwrap();
        form.finish(Err(ApiError::NotAnImage("x".to_string())));

        assert_eq!(form.image, Some(image()));
        assert_eq!(form.description, "New tower");
        assert_eq!(form.project_type, Some(ProjectType::Upcoming));
        assert_eq!(form.notice, Some(Notice::error(CREATE_FAILED)));

        // Retry is possible without re-entering anything
        assert!(form.submit().is_some());
    }
}
