pub mod attendance;
pub mod events;
pub mod players;
pub mod qr;
