//! Per-entity repositories: thin, typed query layers over single tables.

pub mod donation;
pub mod event;
pub mod milestone;
pub mod participant;
pub mod survey;
pub mod user;

pub use donation::DonationRepository;
pub use event::EventRepository;
pub use milestone::MilestoneRepository;
pub use participant::ParticipantRepository;
pub use survey::SurveyRepository;
pub use user::UserRepository;
