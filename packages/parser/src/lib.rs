pub mod error;
pub mod properties;
pub mod tokenizer;

pub use error::{LoadError, PropertyNotFound};
pub use properties::Properties;
pub use tokenizer::parse;
