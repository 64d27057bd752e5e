//! Goalboard - OKR/KPI Health Engine
//!
//! This crate implements the progress-aggregation and RAG-classification
//! core of the Goalboard dashboard: formula-driven roll-ups across the
//! objective hierarchy and traffic-light health reporting.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
