//! HTTP handlers for the action-dispatched API surface.

pub mod records;
