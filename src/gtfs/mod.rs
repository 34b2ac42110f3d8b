use std::io;
use thiserror::Error;

mod config;
mod data;
mod loader;
mod models;
mod source;

pub use config::*;
pub use data::*;
pub use loader::*;
pub use models::*;
pub use source::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Transport error: {0}")]
    Transport(String),
}
