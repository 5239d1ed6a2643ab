pub mod config;
pub mod password_hashing;
pub mod persistence;
