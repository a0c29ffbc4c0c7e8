pub mod about;
pub mod blog;
pub mod chrome;
pub mod contact;
pub mod education;
pub mod experience;
pub mod home;
