//! Static content tables: curriculum outline, lesson bodies, the diagnostic
//! question bank and the weekly topic templates.

pub mod curriculum;
pub mod lessons;
pub mod questions;
pub mod topics;
