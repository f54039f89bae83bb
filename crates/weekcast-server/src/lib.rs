//! HTTP server: JSON forecast API, HTML form pages, and OpenAPI documentation.

pub mod dto;
pub mod error;
pub mod openapi;
pub mod pages;
pub mod routes;
pub mod state;
pub mod templates;
pub mod useragent;
