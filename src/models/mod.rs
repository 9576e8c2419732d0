pub mod donation;
pub mod event;
pub mod forms;
pub mod milestone;
pub mod participant;
pub mod survey;
pub mod user;

pub use donation::{Donation, DonationForm};
pub use event::{Event, EventForm};
pub use milestone::{Milestone, MilestoneForm};
pub use participant::{Participant, ParticipantForm};
pub use survey::{Survey, SurveyForm};
pub use user::{NewUserForm, UpdateUserForm, User};
