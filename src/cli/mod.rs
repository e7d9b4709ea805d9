//! CLI infrastructure for the `gamerunner` binary
//!
//! This module provides the command-line interface for playing games between
//! humans and search bots and for analyzing positions.

pub mod commands;
pub mod config;
pub mod output;
