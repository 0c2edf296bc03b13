pub mod auth_pipeline;
