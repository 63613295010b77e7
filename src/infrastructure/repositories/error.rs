// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;
use std::sync::PoisonError;

/// A panic while a store lock was held leaves the guarded data in an unknown state; surface it as
/// a persistence failure instead of propagating the panic to every later caller.
pub fn map_poison<G>(store: &'static str) -> impl FnOnce(PoisonError<G>) -> DomainError {
    move |_| DomainError::Persistence(format!("{store} lock poisoned"))
}
