pub mod media;
pub mod payments;
pub mod storage;
