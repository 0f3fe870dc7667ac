//! [`RecordEntity`] implementation for [`Teacher`].

use crate::model::{Teacher, TeacherCreate, TeacherId, TeacherUpdate};
use crate::teacher_actor::TeacherError;
use async_trait::async_trait;
use record_actor::RecordEntity;

#[async_trait]
impl RecordEntity for Teacher {
    type Id = TeacherId;
    type Create = TeacherCreate;
    type Update = TeacherUpdate;
    type Context = ();
    type Error = TeacherError;

    fn from_create_params(id: TeacherId, params: TeacherCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            subject: params.subject,
            experience: params.experience,
        })
    }

    async fn on_update(&mut self, update: TeacherUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(subject) = update.subject {
            self.subject = subject;
        }
        if let Some(experience) = update.experience {
            self.experience = experience;
        }
        Ok(())
    }
}
