pub mod vcs_type;
