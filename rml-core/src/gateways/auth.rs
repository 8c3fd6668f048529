use crate::entities::AuthToken;

pub trait TokenStore {
    fn token(&self) -> Option<AuthToken>;
}
