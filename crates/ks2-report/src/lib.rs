//! Printable and downloadable output for ks2.
//!
//! - [`html`] renders self-contained HTML for a scheme term or a diagnostic report.
//! - [`export`] writes download files and encodes print links.

pub mod export;
pub mod html;
