use crate::server::{data::lawyer::LawyerRepository, model::lawyer::CreateLawyerParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::lawyer::LawyerFactory;

mod create;
mod delete;
mod get_all;
