pub mod homography;
pub mod perspective;
