pub mod featured;
pub mod gateway;
pub mod likes;
pub mod recommendations;
pub mod trailer;
