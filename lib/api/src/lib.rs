//! # Cropwise API
//!
//! REST surface for the Cropwise recommendation service: the input form
//! page, the form-encoded predict endpoint, and the JSON predict endpoint.
//!
//! Every failure inside a handler is converted into a response at the
//! handler boundary. The form endpoint always answers 200 with either the
//! recommendation sentence or an error sentence on the rendered page; the
//! JSON endpoint answers 200 with `{"recommended_crop": ...}` or 500 with
//! `{"error": ...}`.

pub mod pages;
pub mod rest;

pub use rest::RestApi;
