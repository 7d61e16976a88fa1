pub mod link_validator;
