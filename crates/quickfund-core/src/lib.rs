//! Core QuickFund library (config, logging, i18n, auth, landing content).

pub mod auth;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod i18n;
pub mod logging;
pub mod records;
pub mod theme;
