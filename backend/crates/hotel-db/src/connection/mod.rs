pub mod pg_connection;
