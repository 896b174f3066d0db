//! Extractor wrappers whose rejections render as [`AppError`] bodies.

use crate::error::AppError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON body; syntax errors are 400, schema mismatches 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
