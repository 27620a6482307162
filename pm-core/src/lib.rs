#![warn(missing_docs)]
//! Core models and ports for assigning a fixed catalog of papers to students
//! according to their ranked preferences.
//!
//! The crate is deliberately small: it knows how to describe a matching
//! problem and how to price a candidate assignment, but it does not know how
//! to search for one. Search strategies live in `pm-solver` and plug in
//! through the [`ports::Assigner`] trait.

/// Domain models for the assignment problem.
///
/// This module contains the catalog of assignable items, the agents and their
/// ranked preferences, the cost function that prices an (item, agent) pair,
/// and the assignment produced by a solver.
///
/// The models carry no solver logic, so that every solver implementation
/// prices assignments identically.
pub mod models;

/// Interface traits for the assignment system.
///
/// These traits define the contract between the domain models and the solver
/// implementations, allowing new strategies to be added without touching the
/// callers that drive them.
pub mod ports;
