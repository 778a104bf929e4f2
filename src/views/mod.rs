//! Web interface components for the top bar shell
//!
//! This module contains the Dioxus components that make up the page:
//! the shell layout with its navigation bar, and the content placeholders
//! the router swaps into the content region.

/// Shell layout and navigation bar
mod navbar;
pub use navbar::Navbar;

/// Home page content
mod home;
pub use home::Home;

/// About page content
mod about;
pub use about::About;

/// Services page content
mod services;
pub use services::Services;

/// Content region for paths outside the route table
mod unmatched;
pub use unmatched::Unmatched;
