//! Breadcrumb trail for the blog browser.

/// One step of the trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Text shown for the step
    pub label: String,
    /// Folder path the step links to (empty for the root)
    pub path: String,
    /// The folder being viewed; rendered without a link
    pub current: bool,
}

/// Label of the root crumb.
pub const ROOT_LABEL: &str = "Blogs";

/// Build the trail for `path`, root first.
///
/// Empty segments (doubled or trailing slashes) are skipped.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut trail = Vec::with_capacity(segments.len() + 1);
    trail.push(Crumb {
        label: ROOT_LABEL.to_string(),
        path: String::new(),
        current: segments.is_empty(),
    });

    let mut cumulative = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        if !cumulative.is_empty() {
            cumulative.push('/');
        }
        cumulative.push_str(segment);
        trail.push(Crumb {
            label: segment.to_string(),
            path: cumulative.clone(),
            current: idx == segments.len() - 1,
        });
    }
    trail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_trail() {
        let trail = breadcrumbs("");
        assert_eq!(trail.len(), 1);
        assert!(trail[0].current);
    }

    #[test]
    fn test_nested_trail() {
        let trail = breadcrumbs("math/topology/knots");
        let paths: Vec<_> = trail.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["", "math", "math/topology", "math/topology/knots"]);
        let current: Vec<_> = trail.iter().map(|c| c.current).collect();
        assert_eq!(current, vec![false, false, false, true]);
        assert_eq!(trail[2].label, "topology");
    }

    #[test]
    fn test_trailing_slash_marks_last_segment_current() {
        let trail = breadcrumbs("math//topology/");
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[2].path, "math/topology");
        assert!(trail[2].current);
    }
}
