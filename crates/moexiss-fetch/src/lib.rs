//! HTTP fetching for the moexiss MOEX ISS client.
//!
//! This crate provides the request pipeline:
//!
//! - [`build`] - URL templating and query encoding over the endpoint catalog
//! - [`IssClient`] - blocking JSON transport behind the [`IssTransport`] seam
//! - [`Retrying`] - optional retry wrapper (no retries happen otherwise)
//! - [`fetch_all_pages`] - offset pagination with fail-soft accumulation
//! - [`api`] - typed operations per endpoint

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moexiss/moexiss/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
mod builder;
mod client;
pub mod extract;
mod pages;
mod retry;

pub use builder::{BASE_QUERY, BuiltRequest, ParamValue, PathValues, QueryValues, build};
pub use client::{ClientConfig, IssClient, IssTransport};
pub use pages::{PAGE_LIMIT, PageCursor, Paged, fetch_all_pages};
pub use retry::{RetryPolicy, Retrying};
