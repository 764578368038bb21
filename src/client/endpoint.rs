//! Study service endpoints.

/// One of the four upload endpoints of the study service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Key-point summary and text snippet
    Summary,
    /// Mind-map outline
    MindMap,
    /// Multiple-choice questions
    Mcqs,
    /// Seven-day study plan
    StudyPlan,
}

impl Endpoint {
    /// All endpoints, in dispatch order.
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Summary,
        Endpoint::MindMap,
        Endpoint::Mcqs,
        Endpoint::StudyPlan,
    ];

    /// URL path relative to the service base.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Summary => "/upload-pdf/",
            Endpoint::MindMap => "/generate-mindmap/",
            Endpoint::Mcqs => "/generate-mcqs/",
            Endpoint::StudyPlan => "/generate-study-plan/",
        }
    }

    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Summary => "summary",
            Endpoint::MindMap => "mind-map",
            Endpoint::Mcqs => "mcqs",
            Endpoint::StudyPlan => "study-plan",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_distinct() {
        let mut paths: Vec<_> = Endpoint::ALL.iter().map(Endpoint::path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 4);
        assert!(paths.iter().all(|p| p.starts_with('/') && p.ends_with('/')));
    }

    #[test]
    fn test_display() {
        assert_eq!(Endpoint::MindMap.to_string(), "mind-map");
        assert_eq!(Endpoint::Summary.path(), "/upload-pdf/");
    }
}
