pub mod quadrants;
pub mod recommend;
pub mod surfaces;
