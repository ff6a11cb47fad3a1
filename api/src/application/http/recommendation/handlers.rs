pub mod recommend;
pub mod recommend_upload;
