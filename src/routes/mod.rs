pub mod events;
pub mod games;
pub mod health;
pub mod lookups;
pub mod players;
pub mod teams;
