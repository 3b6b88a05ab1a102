//! In-memory source backed by seeded data.

use std::collections::HashMap;

use super::types::{CurriculumSource, ProgressSource, SourceError};
use crate::model::{CourseDefinition, HistoryRecord};

/// Canned curriculum and history data, keyed the way the source traits
/// look it up.
///
/// Serves tests and demos, and stands in while a real institutional client
/// is wired up. Every lookup on an unseeded key fails with
/// [`SourceError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    curricula: HashMap<(String, String), Vec<CourseDefinition>>,
    histories: HashMap<(String, String), Vec<HistoryRecord>>,
}

impl FixtureSource {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the course list for one program/catalog pair.
    pub fn with_curriculum(
        mut self,
        program: impl Into<String>,
        catalog: impl Into<String>,
        courses: Vec<CourseDefinition>,
    ) -> Self {
        self.curricula
            .insert((program.into(), catalog.into()), courses);
        self
    }

    /// Seeds the recorded attempts for one student/program pair.
    pub fn with_progress(
        mut self,
        student_id: impl Into<String>,
        program: impl Into<String>,
        records: Vec<HistoryRecord>,
    ) -> Self {
        self.histories
            .insert((student_id.into(), program.into()), records);
        self
    }
}

impl CurriculumSource for FixtureSource {
    fn curriculum(
        &self,
        program: &str,
        catalog: &str,
    ) -> Result<Vec<CourseDefinition>, SourceError> {
        self.curricula
            .get(&(program.to_string(), catalog.to_string()))
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                what: "curriculum",
                key: format!("{program}/{catalog}"),
            })
    }
}

impl ProgressSource for FixtureSource {
    fn progress(
        &self,
        student_id: &str,
        program: &str,
    ) -> Result<Vec<HistoryRecord>, SourceError> {
        self.histories
            .get(&(student_id.to_string(), program.to_string()))
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                what: "academic history",
                key: format!("{student_id}/{program}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ProjectionRunner, SelectionCriteria};

    #[test]
    fn test_seeded_curriculum_round_trips() {
        let courses = vec![CourseDefinition::new("A", "Algebra", 6, 1, "")];
        let source = FixtureSource::new().with_curriculum("ICCI", "2020", courses.clone());
        let fetched = source.curriculum("ICCI", "2020").unwrap();
        assert_eq!(fetched, courses);
    }

    #[test]
    fn test_missing_curriculum_is_not_found() {
        let source = FixtureSource::new();
        let err = source.curriculum("ICCI", "2020").unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
        assert_eq!(err.to_string(), "curriculum not found for ICCI/2020");
    }

    #[test]
    fn test_seeded_progress_round_trips() {
        let records = vec![HistoryRecord::new("A", "APROBADO")];
        let source = FixtureSource::new().with_progress("12345678", "ICCI", records.clone());
        let fetched = source.progress("12345678", "ICCI").unwrap();
        assert_eq!(fetched, records);
    }

    #[test]
    fn test_missing_progress_is_not_found() {
        let source = FixtureSource::new();
        let err = source.progress("12345678", "ICCI").unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn test_usable_through_trait_objects() {
        let source = FixtureSource::new()
            .with_curriculum("ICCI", "2020", vec![])
            .with_progress("12345678", "ICCI", vec![]);
        let curricula: &dyn CurriculumSource = &source;
        let progress: &dyn ProgressSource = &source;
        assert!(curricula.curriculum("ICCI", "2020").is_ok());
        assert!(progress.progress("12345678", "ICCI").is_ok());
    }

    #[test]
    fn test_fetch_then_project() {
        let source = FixtureSource::new()
            .with_curriculum(
                "ICCI",
                "2020",
                vec![
                    CourseDefinition::new("A", "Algebra", 6, 1, ""),
                    CourseDefinition::new("B", "Biology", 6, 2, "A"),
                ],
            )
            .with_progress("12345678", "ICCI", vec![HistoryRecord::new("A", "APROBADO")]);

        let curriculum = source.curriculum("ICCI", "2020").unwrap();
        let history = source.progress("12345678", "ICCI").unwrap();
        let result = ProjectionRunner::compute_selection(
            &curriculum,
            &history,
            &SelectionCriteria::default(),
        );
        assert_eq!(result.course_codes(), vec!["B"]);
    }
}
