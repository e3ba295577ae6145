//! # wage-trends-xlsx
//!
//! XLSX (Office Open XML) reader for wage-trends. Reads the first worksheet of
//! a survey workbook into a [`wage_trends_core::Table`].

pub mod error;
pub mod reader;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
