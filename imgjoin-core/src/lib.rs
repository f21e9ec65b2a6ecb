pub mod digest;
pub mod join;
pub mod manifest;
pub mod natsort;
pub mod verify;
