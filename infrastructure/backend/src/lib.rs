pub mod client;
pub mod catalog {
    pub mod dto;
    pub mod repository;
}
