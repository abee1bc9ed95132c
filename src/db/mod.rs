use crate::types::user::{NewUser, User};

pub mod memory;

pub use memory::MemoryStore;

/// Append-only user store. Handlers hold it as `web::Data<dyn UserStore>`,
/// so tests can substitute their own implementation at `App` construction.
pub trait UserStore: Send + Sync {
    /// Exact, case-sensitive match on email.
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Assigns the next id and appends. Fails if the email is already taken;
    /// the check and the insert happen atomically.
    fn append(&self, new_user: NewUser) -> Result<User, DuplicateEmail>;
}

#[derive(Debug)]
pub struct DuplicateEmail;
