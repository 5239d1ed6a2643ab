pub mod use_cases;

pub use use_cases::{
    index::{IndexAction, IndexHandler, IndexParams, LoginRequest},
    login_team::{LOGIN_SUCCESS_MESSAGE, LoginSuccess, LoginTeamError, LoginTeamUseCase},
    register_team::{RegisterTeamError, RegisterTeamUseCase, RegistrationRequest},
};
