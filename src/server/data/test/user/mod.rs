use crate::server::{
    data::user::UserRepository,
    model::user::{EnsureUserOutcome, EnsureUserParam, ROLE_ADMIN, ROLE_USER},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod ensure;
mod get_all;
mod is_admin;
mod set_role;
