pub mod context;
pub mod person_service;
pub mod zombie_service;

pub use context::ServiceContext;
pub use person_service::{MarkEatenOutcome, PersonService};
pub use zombie_service::ZombieService;
