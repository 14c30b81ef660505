pub mod local_storage;
pub mod cart {
    pub mod repository;
}
