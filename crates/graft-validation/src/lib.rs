//! # graft-validation
//!
//! Binding-graph validation passes shipped with Graft. Each pass implements
//! [`graft_spi::BindingGraphPlugin`] and registers itself in the plugin
//! registry, so the framework picks it up during its own build.

pub mod viewmodel;

pub use viewmodel::ViewModelGraphValidator;
