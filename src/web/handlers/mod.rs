pub mod channels;
pub mod events;
pub mod health;
pub mod oauth;
