//! Lawyer profile domain models and parameters.

use crate::model::lawyer::LawyerDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lawyer {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    pub email: String,
}

impl Lawyer {
    pub fn into_dto(self) -> LawyerDto {
        LawyerDto {
            id: self.id,
            name: self.name,
            specialty: self.specialty,
            email: self.email,
        }
    }

    pub fn from_entity(entity: entity::lawyer::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            specialty: entity.specialty,
            email: entity.email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLawyerParam {
    pub name: String,
    pub specialty: String,
    pub email: String,
}
