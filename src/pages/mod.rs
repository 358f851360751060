pub mod agency;
pub mod landing;
