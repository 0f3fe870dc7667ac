//! [`RecordEntity`] implementation for [`Student`].

use crate::model::{Student, StudentCreate, StudentId, StudentUpdate};
use crate::student_actor::StudentError;
use async_trait::async_trait;
use record_actor::RecordEntity;

#[async_trait]
impl RecordEntity for Student {
    type Id = StudentId;
    type Create = StudentCreate;
    type Update = StudentUpdate;
    type Context = ();
    type Error = StudentError;

    fn from_create_params(id: StudentId, params: StudentCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            age: params.age,
            grade: params.grade,
        })
    }

    async fn on_update(&mut self, update: StudentUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(grade) = update.grade {
            self.grade = grade;
        }
        Ok(())
    }
}
