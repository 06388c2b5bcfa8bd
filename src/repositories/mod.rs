mod backend_contact_repository;
mod traits;

pub use backend_contact_repository::BackendContactRepository;
pub use traits::ContactSource;
