use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not logged in; run `hbr login <email> --password <password>`")]
    NotAuthenticated,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("session store error: {0}")]
    SessionStore(String),
}
