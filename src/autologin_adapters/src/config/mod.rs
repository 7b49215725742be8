pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AccountSettings, ApplicationSettings, AutologinSettings, RouteSettings, SessionSettings,
};
