pub mod messages;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use use_cases::{
    create_password::{CreatePasswordError, CreatePasswordOutcome, CreatePasswordUseCase},
    reset_password::{
        ResetPasswordConfig, ResetPasswordError, ResetPasswordRequest, ResetPasswordUseCase,
    },
};
