pub mod code_generator;
pub mod js;
pub mod locator;
pub mod playwright_config;
pub mod test_case_generator;
pub mod test_case_model;
