pub mod error;
pub mod loading;
pub mod navbar;

pub use error::ErrorView;
pub use loading::LoadingView;
pub use navbar::Navbar;
