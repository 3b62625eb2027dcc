// Unit tests for the quote → book → analysis → signal pipeline

pub mod pipeline_tests;
pub mod property_tests;
