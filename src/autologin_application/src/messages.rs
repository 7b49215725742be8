//! User-facing message texts.

pub const PASSWORD_MISMATCH: &str = "New Password and Confirm New Password values didn't match.";
pub const EMPTY_PASSWORD: &str = "Please enter a new password.";
pub const PASSWORD_UPDATED: &str = "You updated your password.";
pub const SAVE_FAILED: &str = "Something went wrong while saving the new password.";
pub const RESET_TOKEN_EXPIRED: &str = "Reset password token expired.";
pub const RESET_LINK_EXPIRED: &str = "Your password reset link has expired.";
