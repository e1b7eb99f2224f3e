pub mod a001_form_config;
pub mod a002_lead_submission;
