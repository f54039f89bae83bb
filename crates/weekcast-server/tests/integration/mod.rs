mod api_tests;
mod pages_tests;
