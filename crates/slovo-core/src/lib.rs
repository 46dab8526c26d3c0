pub mod accent;
pub mod document;
pub mod error;
pub mod lookup;
pub mod preprocess;
pub mod response;

pub use accent::annotate;
pub use document::{Block, RenderedDocument, build};
pub use error::ResponseError;
pub use lookup::{LookupTicket, TicketIssuer};
pub use preprocess::{Preprocessor, QueryPreprocessor};
pub use response::LookupResult;

#[cfg(test)]
mod tests;
