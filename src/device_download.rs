pub mod impl_fake;
pub mod impl_file_system;
pub mod interface;
