pub mod errors;
pub mod source;
pub mod types;

pub use errors::ViewerError;
pub use source::{
    decode_document, AutoStatusSource, FileStatusSource, HttpStatusSource, StatusSource,
};
pub use types::{Channel, StatusDocument, User};
