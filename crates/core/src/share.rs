//! Share message formatting.

/// Message published by the share action for a finished game.
///
/// ```
/// use tui_2048_core::share_message;
///
/// assert_eq!(share_message(1234), "I just finished 2048 with a score of 1234!");
/// ```
pub fn share_message(score: u32) -> String {
    format!("I just finished 2048 with a score of {}!", score)
}
