pub mod pg_repository;
