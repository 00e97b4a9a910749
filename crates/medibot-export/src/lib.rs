//! medibot-export
//!
//! Downloadable prediction reports: plain text and DOCX, both rendered
//! from Tera templates over a [`report::ReportContext`].

pub mod docx;
pub mod error;
pub mod render;
pub mod report;
pub mod styles;
