//! # Teacher Client
use crate::model::{Teacher, TeacherCreate, TeacherId};
use crate::teacher_actor::TeacherError;
use record_actor::{RecordClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Teacher actor.
#[derive(Clone)]
pub struct TeacherClient {
    inner: StoreClient<Teacher>,
}

impl TeacherClient {
    pub fn new(inner: StoreClient<Teacher>) -> Self {
        Self { inner }
    }

    /// Inserts a teacher and returns it as stored.
    #[instrument(skip(self))]
    pub async fn create_teacher(&self, params: TeacherCreate) -> Result<Teacher, TeacherError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.fetch(id).await?.ok_or(TeacherError::NotFound(id))
    }
}

impl RecordClient<Teacher> for TeacherClient {
    type Error = TeacherError;

    fn inner(&self) -> &StoreClient<Teacher> {
        &self.inner
    }

    fn not_found(id: TeacherId) -> Self::Error {
        TeacherError::NotFound(id)
    }

    fn map_error(e: StoreError) -> Self::Error {
        TeacherError::ActorCommunication(e.to_string())
    }
}
