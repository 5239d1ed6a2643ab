pub mod index;
pub mod login_team;
pub mod register_team;

#[cfg(test)]
pub(crate) mod test_support;
