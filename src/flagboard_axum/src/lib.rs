//! Axum bindings for the scoreboard's index endpoint.
//!
//! The route extracts the form, the caller's address and the session cookie,
//! runs [`flagboard_application::IndexHandler`] and turns the outcome into a
//! JSON envelope plus, after a successful login, a fresh session cookie.
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/ajax/index", post(routes::index::<C, T, K, L, S>))
//!     .with_state((handler, session_store, SessionCookie::new("FBCTF", true)));
//! ```

pub mod cookie;
pub mod routes;

pub use cookie::SessionCookie;
