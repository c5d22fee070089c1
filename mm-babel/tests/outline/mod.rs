//! Outline markup tests (mind map → Markdown / Textile).

mod dialects;
mod export;
