use std::sync::Mutex;

use crate::db::{DuplicateEmail, UserStore};
use crate::types::user::{NewUser, User};

/// Process-lifetime user store: an ordered vector scanned linearly by email,
/// plus an explicit id counter so ids stay stable even if deletion is ever
/// added.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    users: Vec<User>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            inner: Mutex::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock only means another request panicked mid-append;
        // the vector itself is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn count_by_email(&self, email: &str) -> usize {
        self.lock()
            .users
            .iter()
            .filter(|u| u.email == email)
            .count()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for MemoryStore {
    fn find_by_email(&self, email: &str) -> Option<User> {
        self.lock().users.iter().find(|u| u.email == email).cloned()
    }

    fn append(&self, new_user: NewUser) -> Result<User, DuplicateEmail> {
        let mut inner = self.lock();

        // Re-checked under the same guard that pushes, so two concurrent
        // registrations with one email cannot both land.
        if inner.users.iter().any(|u| u.email == new_user.email) {
            return Err(DuplicateEmail);
        }

        let user = User {
            id: inner.next_id,
            name: new_user.name,
            surname: new_user.surname,
            email: new_user.email,
            password_hash: new_user.password_hash,
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        Ok(user)
    }
}
