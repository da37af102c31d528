//! Users module - student profiles.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{NewUserProfile, UserProfile, UserProfileUpdate};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
