pub mod auth;
pub mod donations;
pub mod events;
pub mod home;
pub mod milestones;
pub mod participants;
pub mod surveys;
pub mod users;
