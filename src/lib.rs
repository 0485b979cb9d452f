// src/lib.rs

//! Homepage content library
//!
//! Loads the JSON documents of a data-driven academic homepage and turns
//! the news document into paged, render-ready frames.

pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod render;
pub mod services;
pub mod storage;
pub mod utils;
