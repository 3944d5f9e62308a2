//! Finanzas frontend library: models, cash ledger, transaction form, API client, UI.

pub mod api;
pub mod app;
pub mod form;
pub mod format;
pub mod ledger;
pub mod models;
pub mod refresh;
pub mod theme;
pub mod widgets;
pub mod screens;
