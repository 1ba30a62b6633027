// src/simulators/mod.rs
//! Quantum circuit simulators
//!
//! The reservoir only needs a Z-basis sampling oracle: give it a
//! circuit and a shot count, get back normalized outcome frequencies.
//! A classical statevector backend provides that contract here.

pub mod statevector;

pub use statevector::ReservoirSimulator;
