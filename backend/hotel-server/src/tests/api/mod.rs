mod envelope;
mod error;
mod extractors;
mod validation;
