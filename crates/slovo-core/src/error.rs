/// Payload problems that stop rendering before any content is produced
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("Invalid response from dictionary API.")]
    MalformedResponse,

    #[error("No word found")]
    EmptyTerm,
}
