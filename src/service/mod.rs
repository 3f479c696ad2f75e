//! Store operations per resource, plus request field validation.

pub mod pets;
pub mod policies;
pub mod quotes;
pub mod users;
pub mod validation;

pub use pets::PetService;
pub use policies::PolicyService;
pub use quotes::QuoteService;
pub use users::UserService;
