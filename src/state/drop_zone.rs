use std::path::{Path, PathBuf};

/// Drag-and-drop target for image files
///
/// The window reports each file of a multi-file drop separately. Only the
/// first one of a batch is accepted.
#[derive(Debug, Clone, Default)]
pub struct DropZone {
    /// A drag is hovering over the window
    active: bool,
    /// The current batch has not produced a file yet
    accepting: bool,
    /// Accepted file whose contents are still being read
    loading: Option<PathBuf>,
}

impl DropZone {
    pub fn hover(&mut self) {
        if !self.active {
            self.active = true;
            self.accepting = true;
        }
    }

    pub fn leave(&mut self) {
        self.active = false;
        self.accepting = false;
    }

    /// Returns the path if it is the first file of the current drop
    pub fn drop_file(&mut self, path: PathBuf) -> Option<PathBuf> {
        // Some platforms skip the hover events entirely
        if !self.active {
            self.active = true;
            self.accepting = true;
        }

        if self.accepting {
            self.accepting = false;
            self.loading = Some(path.clone());
            Some(path)
        } else {
            None
        }
    }

    /// Close the batch once the window has delivered all drop events
    pub fn settle(&mut self) {
        if self.active && !self.accepting {
            self.active = false;
        }
        self.loading = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn loading(&self) -> Option<&Path> {
        self.loading.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_dropped_file_is_used() {
        let mut zone = DropZone::default();
        zone.hover();
        zone.hover();
        assert!(zone.is_active());

        assert_eq!(zone.drop_file("a.png".into()), Some(PathBuf::from("a.png")));
        assert_eq!(zone.drop_file("b.png".into()), None);
        assert_eq!(zone.loading(), Some(Path::new("a.png")));

        zone.settle();
        assert!(!zone.is_active());
        assert!(zone.loading().is_none());
    }

    #[test]
    fn test_new_drag_accepts_again() {
        let mut zone = DropZone::default();
        zone.hover();
        zone.drop_file("a.png".into());
        zone.settle();

        zone.hover();
        assert_eq!(zone.drop_file("c.png".into()), Some(PathBuf::from("c.png")));
    }

    #[test]
    fn test_leave_cancels_drag() {
        let mut zone = DropZone::default();
        zone.hover();
        zone.leave();
        assert!(!zone.is_active());
    }

    #[test]
    fn test_drop_without_hover_is_accepted() {
        let mut zone = DropZone::default();
        assert!(zone.drop_file("a.png".into()).is_some());
    }
}
