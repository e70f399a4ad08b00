//! Interaction state machines that sit between user input and the store.

pub mod creation_flow;
