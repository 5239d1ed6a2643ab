pub mod action;
pub mod flags;
pub mod invite_token;
pub mod logo;
pub mod password;
pub mod roster;
pub mod session;
pub mod team;
pub mod team_name;
