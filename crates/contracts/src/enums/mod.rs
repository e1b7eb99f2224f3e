pub mod form_variant;
