//! Book id generation.
//!
//! Ids are 16-character opaque strings drawn from the url-safe 64-symbol
//! alphabet. Uniqueness is assumed from the key space, not verified.

use rand::Rng;

/// Length of a generated book id
pub const BOOK_ID_LEN: usize = 16;

const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh opaque id for a new book.
    fn generate(&self) -> String;
}

/// Production generator sampling the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..BOOK_ID_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
