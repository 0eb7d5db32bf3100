pub mod album;
pub mod artist;
pub mod award;
pub mod track;
