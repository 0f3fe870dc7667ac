//! # Student Client
use crate::model::{Student, StudentCreate, StudentId};
use crate::student_actor::StudentError;
use record_actor::{RecordClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Student actor.
#[derive(Clone)]
pub struct StudentClient {
    inner: StoreClient<Student>,
}

impl StudentClient {
    pub fn new(inner: StoreClient<Student>) -> Self {
        Self { inner }
    }

    /// Inserts a student and returns it as stored.
    #[instrument(skip(self))]
    pub async fn create_student(&self, params: StudentCreate) -> Result<Student, StudentError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.fetch(id).await?.ok_or(StudentError::NotFound(id))
    }
}

impl RecordClient<Student> for StudentClient {
    type Error = StudentError;

    fn inner(&self) -> &StoreClient<Student> {
        &self.inner
    }

    fn not_found(id: StudentId) -> Self::Error {
        StudentError::NotFound(id)
    }

    fn map_error(e: StoreError) -> Self::Error {
        StudentError::ActorCommunication(e.to_string())
    }
}
