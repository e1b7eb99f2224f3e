//! Lead capture through the shared sign-up modal
//!
//! trigger click → [`configurator`] → user input → submit click →
//! [`orchestrator`] ([`validator`], thank-you tab, host hook, [`submitter`]) → reload

pub mod api;
pub mod broker;
pub mod configurator;
pub mod orchestrator;
pub mod submitter;
pub mod validator;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;
