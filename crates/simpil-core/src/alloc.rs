//! Hashing state shared by simpil collections.

pub use ahash::RandomState;

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::BuildHasher;

    #[test]
    fn test_random_state_is_consistent() {
        let state = RandomState::new();
        assert_eq!(state.hash_one("red"), state.hash_one("red"));
    }
}
