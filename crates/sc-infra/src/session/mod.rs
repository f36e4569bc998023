mod file_token_store;

pub use file_token_store::{FileSessionTokenStore, DEFAULT_SESSION_FILE};
