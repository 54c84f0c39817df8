/// Errors returned by conversion entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The tone table and dictionary have not been built yet.
    #[error("not yet initialized")]
    NotInitialized,

    /// Input was exhausted. The converter never produces this; iteration ends
    /// on its own when the character sequence runs out.
    #[error("end of input")]
    EndOfInput,
}
