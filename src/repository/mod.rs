pub mod pg_repository_impl;
