pub mod payload_tests;
pub mod store_workflow_tests;
