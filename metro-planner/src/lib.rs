//! Metro route planner.
//!
//! Answers: "I'm standing here, how do I get to that station?" Station
//! data and ordered line definitions are loaded once into a catalog and a
//! weighted line graph; each query resolves the nearest station, finds the
//! shortest path, prices it and breaks it into per-line rides.

pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod graph;
pub mod lines;
pub mod planner;
pub mod stations;
pub mod store;
pub mod web;
