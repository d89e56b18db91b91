#![allow(warnings)]
//! Quotation Maker Frontend Entry Point

mod error;
mod config;
mod logger;
mod models;
mod storage;
mod store;
mod terms;
mod format;
mod form;
mod export;
mod context;
mod components;
mod app;

#[cfg(test)]
mod tests;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(AppConfig::default().level_filter());
    mount_to_body(App);
}
