use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        jwt::Principal,
    },
    model::user::Role,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn principal_for(user: &entity::user::Model) -> Principal {
    Principal {
        id: user.id,
        username: user.email.clone(),
        role: Role::from_stored(&user.role),
    }
}
