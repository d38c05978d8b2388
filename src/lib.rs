//! Taskhive - Task and Project Collaboration Backend
//!
//! This crate implements the task/project lifecycle and workflow engine:
//! soft-delete/restore semantics, the task status state machine, project
//! membership management, and the invitation lifecycle.

pub mod adapters;
pub mod application;
pub mod cleanup;
pub mod config;
pub mod domain;
pub mod ports;
