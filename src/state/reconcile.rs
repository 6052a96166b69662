//! Merge rules applied to the local project list after a successful request
//!
//! The list is never refetched after create, edit or delete. Each outcome is
//! folded into the working copy with one of these rules instead.

use super::data::{Project, ProjectId};

/// Add a newly created project to the end of the list
pub fn append(projects: &mut Vec<Project>, project: Project) {
    projects.push(project);
}

/// Replace the entry with the same identifier, keeping its position
///
/// Returns false if no entry matched.
pub fn replace(projects: &mut [Project], project: Project) -> bool {
    match projects.iter_mut().find(|p| p.id == project.id) {
        Some(slot) => {
            *slot = project;
            true
        }
        None => false,
    }
}

/// Remove every entry with the given identifier
///
/// Returns false if nothing was removed.
pub fn remove(projects: &mut Vec<Project>, id: &ProjectId) -> bool {
    let before = projects.len();
    projects.retain(|p| &p.id != id);
    projects.len() != before
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::data::{ProjectImage, ProjectType};

    pub(crate) fn project(id: &str, description: &str) -> Project {
        Project {
            id: ProjectId(id.to_string()),
            project_name: format!("Project {id}"),
            description: description.to_string(),
            project_type: ProjectType::Completed,
            image: ProjectImage::new(vec![0xFF, 0xD8, id.len() as u8]),
        }
    }

    fn ids(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.id.0.as_str()).collect()
    }

    #[test]
    fn test_append_keeps_existing_order() {
        let mut projects = vec![project("a", ""), project("b", "")];
        append(&mut projects, project("c", ""));
        assert_eq!(ids(&projects), ["a", "b", "c"]);
    }

    #[test]
    fn test_replace_in_place() {
        let mut projects = vec![project("a", "old"), project("b", "old"), project("c", "old")];

        assert!(replace(&mut projects, project("b", "new")));

        assert_eq!(ids(&projects), ["a", "b", "c"]);
        assert_eq!(projects[1].description, "new");
        assert_eq!(projects[0].description, "old");
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut projects = vec![project("a", "old")];
        assert!(!replace(&mut projects, project("z", "new")));
        assert_eq!(projects, vec![project("a", "old")]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut projects = vec![project("a", ""), project("b", ""), project("c", "")];

        assert!(remove(&mut projects, &ProjectId("b".to_string())));
        assert_eq!(ids(&projects), ["a", "c"]);

        assert!(!remove(&mut projects, &ProjectId("b".to_string())));
        assert_eq!(ids(&projects), ["a", "c"]);
    }
}
