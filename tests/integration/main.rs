mod common;

mod candidates_api_test;
mod submission_flow_test;
