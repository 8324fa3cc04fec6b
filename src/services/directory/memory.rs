use std::collections::HashMap;

use async_trait::async_trait;

use super::{DirectoryError, Subject, SubjectDirectory};

/// Fixed set of subjects held in memory. Handy for tests and local runs.
#[derive(Clone, Debug, Default)]
pub struct InMemorySubjectDirectory {
    subjects: HashMap<String, Subject>,
}

impl InMemorySubjectDirectory {
    pub fn new(subjects: impl IntoIterator<Item = Subject>) -> Self {
        Self {
            subjects: subjects.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    pub fn insert(&mut self, subject: Subject) {
        self.subjects.insert(subject.id.clone(), subject);
    }
}

#[async_trait]
impl SubjectDirectory for InMemorySubjectDirectory {
    async fn load_by_id(&self, id: &str) -> Result<Subject, DirectoryError> {
        self.subjects
            .get(id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound { id: id.to_string() })
    }
}
