use std::collections::BTreeSet;

use crate::portfolio::{Project, ProjectStatus};

/// Statuses currently shown in the projects grid. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter(BTreeSet<ProjectStatus>);

impl Default for StatusFilter {
    fn default() -> Self {
        Self(ProjectStatus::ALL.into_iter().collect())
    }
}

impl StatusFilter {
    /// Flips `status`. Turning off the last active status is refused; returns whether anything changed.
    pub fn toggle(&mut self, status: ProjectStatus) -> bool {
        if self.0.contains(&status) {
            if self.0.len() == 1 {
                return false;
            }
            self.0.remove(&status)
        } else {
            self.0.insert(status)
        }
    }

    pub fn contains(&self, status: ProjectStatus) -> bool {
        self.0.contains(&status)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.contains(p.status)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectBrowser {
    filter: StatusFilter,
    selected: Option<String>,
}

impl ProjectBrowser {
    pub fn filter(&self) -> &StatusFilter {
        &self.filter
    }

    pub fn toggle_status(&mut self, status: ProjectStatus) -> bool {
        self.filter.toggle(status)
    }

    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        self.filter.apply(projects)
    }

    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn selected<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let id = self.selected.as_deref()?;
        projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, status: ProjectStatus) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            long_description: None,
            tech_stack: vec![],
            status,
            image_url: None,
            live_url: None,
            repo_url: None,
            featured: false,
        }
    }

    fn ids(projects: Vec<&Project>) -> Vec<&str> {
        projects.into_iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_starts_with_every_status() {
        let filter = StatusFilter::default();
        assert_eq!(filter.len(), 3);
        assert!(ProjectStatus::ALL.iter().all(|s| filter.contains(*s)));
    }

    #[test]
    fn test_toggle_off_and_on() {
        let mut filter = StatusFilter::default();
        assert!(filter.toggle(ProjectStatus::Planned));
        assert!(!filter.contains(ProjectStatus::Planned));
        assert!(filter.toggle(ProjectStatus::Planned));
        assert!(filter.contains(ProjectStatus::Planned));
    }

    #[test]
    fn test_last_status_cannot_be_removed() {
        let mut filter = StatusFilter::default();
        assert!(filter.toggle(ProjectStatus::Completed));
        assert!(filter.toggle(ProjectStatus::InProgress));
        assert_eq!(filter.len(), 1);

        assert!(!filter.toggle(ProjectStatus::Planned));
        assert_eq!(filter.len(), 1);
        assert!(filter.contains(ProjectStatus::Planned));
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_apply_keeps_order() {
        let projects = vec![
            project("a", ProjectStatus::Completed),
            project("b", ProjectStatus::Planned),
            project("c", ProjectStatus::InProgress),
            project("d", ProjectStatus::Completed),
        ];
        let mut filter = StatusFilter::default();
        assert_eq!(ids(filter.apply(&projects)), vec!["a", "b", "c", "d"]);
        filter.toggle(ProjectStatus::Planned);
        filter.toggle(ProjectStatus::InProgress);
        assert_eq!(ids(filter.apply(&projects)), vec!["a", "d"]);
    }

    #[test]
    fn test_select_and_dismiss() {
        let projects = vec![
            project("a", ProjectStatus::Completed),
            project("b", ProjectStatus::Planned),
        ];
        let mut browser = ProjectBrowser::default();
        assert!(browser.selected(&projects).is_none());

        browser.select("b");
        assert_eq!(browser.selected(&projects).map(|p| p.title.as_str()), Some("B"));

        browser.dismiss();
        assert!(browser.selected(&projects).is_none());

        browser.select("missing");
        assert!(browser.selected(&projects).is_none());
    }

    #[test]
    fn test_browser_filter() {
        let projects = vec![
            project("a", ProjectStatus::Completed),
            project("b", ProjectStatus::Planned),
        ];
        let mut browser = ProjectBrowser::default();
        assert!(browser.toggle_status(ProjectStatus::Completed));
        assert_eq!(ids(browser.visible(&projects)), vec!["b"]);
        assert!(browser.filter().contains(ProjectStatus::Planned));
    }
}
