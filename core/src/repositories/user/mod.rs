pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;

pub use r#trait::UserRepository;

#[cfg(test)]
pub use mock::MockUserRepository;
