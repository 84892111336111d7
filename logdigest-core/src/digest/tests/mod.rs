mod aggregate_tests;
mod classify_tests;
