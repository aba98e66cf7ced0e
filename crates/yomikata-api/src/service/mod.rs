//! Service module

mod annotate_api_service;

pub use annotate_api_service::{AnnotateApiService, AnnotateApiServiceFull};
