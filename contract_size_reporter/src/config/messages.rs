//!
//! The report row messages.
//!

///
/// The report row messages, one per status.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// The message for contracts over the limit.
    pub too_big: String,
    /// The message for contracts close to the limit.
    pub almost_reached: String,
    /// The message for contracts within the limit.
    pub ok: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            too_big: "This contract is too big to be deployed!".to_owned(),
            almost_reached: "Maximum capacity almost reached. Please refactor.".to_owned(),
            ok: "OK".to_owned(),
        }
    }
}
